//! The three independent screens behind the tab bar.

use std::fmt;

use crate::{
    config::Config,
    export::HtmlFilePrinter,
    ledger::Schema,
    report::ReportRenderer,
    screen::Screen,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Account,
    Labor,
    RawProducts,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Account, Tab::Labor, Tab::RawProducts];

    /// Route name shown in the tab bar.
    pub fn route(self) -> &'static str {
        match self {
            Tab::Account => "Account",
            Tab::Labor => "LaborScreen",
            Tab::RawProducts => "RawProductsScreen",
        }
    }

    /// Material Community icon for the tab.
    pub fn icon(self) -> &'static str {
        match self {
            Tab::Account => "account",
            Tab::Labor => "account-hard-hat",
            Tab::RawProducts => "cube-outline",
        }
    }

    pub fn schema(self) -> Schema {
        match self {
            Tab::Account => Schema::account(),
            Tab::Labor => Schema::labor(),
            Tab::RawProducts => Schema::raw_products(),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Owns one [`Screen`] per tab plus the shared report settings.
///
/// Screens never see each other; the workbook only routes to them.
#[derive(Debug)]
pub struct Workbook {
    account: Screen,
    labor: Screen,
    raw_products: Screen,
    renderer: ReportRenderer,
    printer: HtmlFilePrinter,
}

impl Workbook {
    pub fn new(config: &Config) -> Self {
        let policy = config.edit_policy;
        let printer = match &config.export_dir {
            Some(dir) => HtmlFilePrinter::new(dir),
            None => HtmlFilePrinter::default(),
        };
        tracing::debug!(?policy, dir = %printer.dir().display(), "workbook created");
        Self {
            account: Screen::new(Tab::Account.schema(), policy),
            labor: Screen::new(Tab::Labor.schema(), policy),
            raw_products: Screen::new(Tab::RawProducts.schema(), policy),
            renderer: ReportRenderer::new(config.report.clone()),
            printer,
        }
    }

    pub fn screen(&self, tab: Tab) -> &Screen {
        match tab {
            Tab::Account => &self.account,
            Tab::Labor => &self.labor,
            Tab::RawProducts => &self.raw_products,
        }
    }

    pub fn screen_mut(&mut self, tab: Tab) -> &mut Screen {
        match tab {
            Tab::Account => &mut self.account,
            Tab::Labor => &mut self.labor,
            Tab::RawProducts => &mut self.raw_products,
        }
    }

    pub fn renderer(&self) -> &ReportRenderer {
        &self.renderer
    }

    /// Printer configured for this workbook's export directory.
    pub fn printer(&self) -> &HtmlFilePrinter {
        &self.printer
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
