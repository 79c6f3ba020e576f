//! Expansion state of the filter menus.

/// One of the three filter menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMenu {
    /// The sort order menu.
    Sort = 0,
    /// The time-window menu.
    Duration = 1,
    /// The settlement status menu.
    Status = 2,
}

/// Which filter menus are expanded and whether the mobile filter drawer is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterMenus {
    expanded: [bool; 3],
    mobile_filters_opened: bool,
}

impl FilterMenus {
    /// Toggle one menu and close the mobile filter drawer.
    ///
    /// The other menus are left as they are.
    pub fn change_menu_state(&mut self, menu: FilterMenu) {
        let flag = &mut self.expanded[menu as usize];
        *flag = !*flag;
        self.mobile_filters_opened = false;
    }

    /// Collapse one menu and close the mobile filter drawer.
    pub fn collapse(&mut self, menu: FilterMenu) {
        self.expanded[menu as usize] = false;
        self.mobile_filters_opened = false;
    }

    /// Open or close the mobile filter drawer.
    pub fn toggle_mobile_filters(&mut self) {
        self.mobile_filters_opened = !self.mobile_filters_opened;
    }

    /// The expansion flags indexed by [FilterMenu].
    pub fn expansion_flags(&self) -> [bool; 3] {
        self.expanded
    }

    /// Whether `menu` is expanded.
    pub fn is_expanded(&self, menu: FilterMenu) -> bool {
        self.expanded[menu as usize]
    }

    /// Whether the mobile filter drawer is open.
    pub fn is_mobile_filters_opened(&self) -> bool {
        self.mobile_filters_opened
    }
}
