use std::{error::Error, path::PathBuf, process::exit};

use clap::Parser;
use time::Date;

use bankview::{
    DayGroup, DirectionFilter, FilterSelection, FilterStore, GlobalTransactionFilters,
    PaginationIndicator, PaginationMethod, Paginator, TableRow, Transaction, ViewConfig,
    format_amount, load_day_groups, setup_logging, today_in,
    transaction::{
        DayTotals, DurationWindow, SortOrder, StatusFilter, TransactionDirection, parse_date,
    },
    truncate_graphemes,
};

/// The max number of graphemes of a title to print before truncating it.
const MAX_TITLE_GRAPHEMES: usize = 32;

/// Filter, sort and page through exported bank transactions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a .json or .csv export of transactions.
    #[arg(long, short)]
    input: PathBuf,

    /// File path to a JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only show transactions whose title contains this phrase.
    #[arg(long, short)]
    search: Option<String>,

    /// How to order days, or transactions within a day.
    #[arg(long, value_enum, default_value_t = SortOrder::Default)]
    sort: SortOrder,

    /// How far back to show transactions.
    #[arg(long, value_enum, default_value_t = DurationWindow::Default)]
    duration: DurationWindow,

    /// Only show pending or only booked transactions.
    #[arg(long, value_enum, default_value_t = StatusFilter::Default)]
    status: StatusFilter,

    /// Show a flat table filtered by direction instead of day groups.
    #[arg(long, value_enum)]
    direction: Option<DirectionFilter>,

    /// The viewport width in pixels used to size pages.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// The page of day groups to show, or the number of carousel steps.
    #[arg(long, short, default_value_t = 1)]
    page: usize,

    /// Rotate through day groups like a carousel instead of paging.
    #[arg(long)]
    carousel: bool,

    /// The date to treat as today (YYYY-MM-DD). Defaults to today in the
    /// configured timezone.
    #[arg(long, value_parser = parse_date)]
    today: Option<Date>,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    let config = match &args.config {
        Some(path) => ViewConfig::load(path)?,
        None => ViewConfig::default(),
    };

    let groups = match load_day_groups(&args.input) {
        Ok(groups) => groups,
        Err(error) => {
            eprintln!("{error}");
            exit(1);
        }
    };

    if let Some(direction) = args.direction {
        print_table(groups, direction, args.search.as_deref().unwrap_or_default());
        return Ok(());
    }

    let today = match args.today {
        Some(today) => today,
        None => today_in(&config.timezone)?,
    };

    let mut store = FilterStore::new();
    store.begin_context(groups);
    store.select(FilterSelection {
        sort: args.sort,
        duration: args.duration,
        status: args.status,
    });
    if let Some(phrase) = &args.search {
        store.search(phrase);
    }
    let filtered = store.refresh(today);

    let pagination = &config.pagination;
    let method = if args.carousel {
        PaginationMethod::MovableItems
    } else {
        PaginationMethod::Paged
    };
    let mut paginator: Paginator<DayGroup> = Paginator::new(method)
        .with_large_breakpoint_items_per_page(pagination.large_breakpoint_items_per_page);
    paginator.set_paginated_array(filtered.as_slice());
    paginator.handle_width_change(
        args.width,
        pagination.medium_items_per_page,
        pagination.max_items_per_page,
    );

    match method {
        PaginationMethod::Paged => {
            paginator.set_current_page(args.page);
            paginator.update_pages_count();
        }
        PaginationMethod::MovableItems => {
            for _ in 1..args.page {
                paginator.next_page();
            }
        }
    }

    println!(
        "{} | {} | {} | today {today}",
        args.sort.label(),
        args.duration.label(),
        args.status.label()
    );

    for group in paginator.paginated_items().unwrap_or_default() {
        print_day_group(group);
    }

    if method == PaginationMethod::Paged {
        println!(
            "{}",
            format_indicators(&paginator.indicators(pagination.max_page_indicators))
        );
    } else if let Some(current) = paginator.current_item().and_then(|group| group.first()) {
        println!("current day: {}", current.date);
    }

    Ok(())
}

fn print_day_group(group: &DayGroup) {
    let Some(first) = group.first() else {
        println!("\n(no matching transactions)");
        return;
    };

    let totals = DayTotals::for_group(group);
    println!(
        "\n{}  in {}  out {}",
        first.date,
        format_amount(totals.income, &first.account_currency),
        format_amount(totals.expenses, &first.account_currency)
    );

    for transaction in group {
        print_transaction(transaction);
    }
}

fn print_transaction(transaction: &Transaction) {
    println!(
        "  {:<5}  {:<32}  {:>16}  {:?}",
        transaction.time,
        truncate_graphemes(&transaction.title, MAX_TITLE_GRAPHEMES),
        format_amount(signed_amount(transaction), &transaction.currency),
        transaction.status
    );
}

fn signed_amount(transaction: &Transaction) -> f64 {
    match transaction.direction {
        TransactionDirection::Incoming => transaction.amount,
        TransactionDirection::Outgoing => -transaction.amount,
    }
}

fn print_table(groups: Vec<DayGroup>, direction: DirectionFilter, phrase: &str) {
    let rows: Vec<TableRow> = groups.iter().flatten().map(TableRow::from).collect();
    let mut filters = GlobalTransactionFilters::new(rows);
    filters.set_applied_filter(direction, phrase);

    for row in filters.data() {
        let amount = match row.direction {
            TransactionDirection::Incoming => row.amount,
            TransactionDirection::Outgoing => -row.amount,
        };
        println!(
            "{:<10}  {:<32}  {:>16}",
            row.date,
            truncate_graphemes(&row.description, MAX_TITLE_GRAPHEMES),
            format_amount(amount, &row.currency)
        );
    }
}

fn format_indicators(indicators: &[PaginationIndicator]) -> String {
    indicators
        .iter()
        .map(|indicator| match indicator {
            PaginationIndicator::Page(page) => page.to_string(),
            PaginationIndicator::CurrPage(page) => format!("[{page}]"),
            PaginationIndicator::Ellipsis => "...".to_owned(),
            PaginationIndicator::NextButton(_) => ">".to_owned(),
            PaginationIndicator::BackButton(_) => "<".to_owned(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
