//! Command dispatch and handlers for the interactive shell.

use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm};
use strsim::levenshtein;
use uuid::Uuid;

use crate::config::{Config, ConfigManager};
use crate::core::services::{
    CalendarService, ExpenseService, OptimizationService, RenewalService, ServiceError,
    SummaryService, DEFAULT_WINDOW_DAYS,
};
use crate::core::store::{ExpensePatch, ExpenseStore, InMemoryStore};
use crate::core::{filter::filter_and_sort, paths, ExpenseFilter, SortOrder};
use crate::domain::{
    BillingCycle, Displayable, Expense, ExpenseBook, ExpenseCategory, ExpenseType, Identifiable,
    NamedEntity, ThemePreference,
};
use crate::errors::TrackerError;
use crate::storage::{export_expenses, JsonStorage, StorageBackend};

use super::output;
use super::table::{Alignment, Table, TableColumn};

const DEFAULT_BOOK: &str = "default";
const SUGGESTION_DISTANCE: usize = 3;

/// Commands and their one-line help, in display order.
const COMMANDS: &[(&str, &str)] = &[
    ("dashboard", "Burn rate, category breakdown, and renewal alerts"),
    ("list", "List expenses: --search TEXT --category NAME --all --sort KEY"),
    ("add", "Add an expense: NAME AMOUNT CATEGORY [flags]"),
    ("edit", "Edit an expense: SELECTOR [flags]"),
    ("remove", "Delete an expense after confirmation"),
    ("toggle", "Flip an expense between active and inactive"),
    ("renewals", "Upcoming renewals: --days N (default 30)"),
    ("calendar", "Renewal calendar: [YYYY-MM]"),
    ("trend", "Six-month spending trend"),
    ("suggest", "Cost-optimization suggestions"),
    ("export", "Write expenses-<date>.json: [DIR]"),
    ("seed", "Load sample data into the current book"),
    ("settings", "Show or set preferences: [KEY VALUE]"),
    ("help", "Show this command list"),
    ("exit", "Leave the shell"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Failures that abort the whole shell.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures scoped to a single command; reported and the loop continues.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Dialog(#[from] dialoguer::Error),
}

pub struct ShellContext {
    pub running: bool,
    mode: CliMode,
    store: InMemoryStore,
    book_name: String,
    storage: JsonStorage,
    config: Config,
    config_manager: ConfigManager,
    theme: ColorfulTheme,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        if mode == CliMode::Script {
            output::set_preferences(output::OutputPreferences {
                quiet_mode: true,
                plain_mode: true,
            });
        }

        let config_manager = ConfigManager::new();
        let config = config_manager.load()?;
        let storage = JsonStorage::new();
        let book_name = config
            .last_opened_book
            .clone()
            .unwrap_or_else(|| DEFAULT_BOOK.to_string());
        let book = match storage.load(&book_name) {
            Ok(book) => book,
            Err(TrackerError::BookNotFound(_)) => ExpenseBook::new(&book_name),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            running: true,
            mode,
            store: InMemoryStore::new(book),
            book_name,
            storage,
            config,
            config_manager,
            theme: ColorfulTheme::default(),
        })
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        COMMANDS.iter().map(|(name, _)| *name).collect()
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.book_name)
    }

    pub fn report_error(&self, err: CommandError) {
        output::error(err.to_string());
    }

    pub fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit shell?")
            .default(false)
            .interact()
            .map_err(|err| CliError::Io(std::io::Error::other(err)))
    }

    pub fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        match command {
            "dashboard" => self.cmd_dashboard(),
            "list" => self.cmd_list(args),
            "add" => self.cmd_add(args),
            "edit" => self.cmd_edit(args),
            "remove" | "delete" => self.cmd_remove(args),
            "toggle" => self.cmd_toggle(args),
            "renewals" => self.cmd_renewals(args),
            "calendar" => self.cmd_calendar(args),
            "trend" => self.cmd_trend(),
            "suggest" => self.cmd_suggest(),
            "export" => self.cmd_export(args),
            "seed" => self.cmd_seed(),
            "settings" => self.cmd_settings(args),
            "help" => self.cmd_help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            unknown => {
                output::error(format!("Unknown command `{}`.", unknown));
                self.suggest_command(unknown);
                Ok(())
            }
        }
        .map(|_| LoopControl::Continue)
    }

    fn suggest_command(&self, input: &str) {
        let mut candidates: Vec<(usize, &str)> = COMMANDS
            .iter()
            .map(|(name, _)| (levenshtein(name, input), *name))
            .collect();
        candidates.sort_by_key(|(distance, _)| *distance);
        if let Some((distance, best)) = candidates.first() {
            if *distance <= SUGGESTION_DISTANCE {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    fn persist(&mut self) -> Result<(), CommandError> {
        self.storage.save(self.store.book(), &self.book_name)?;
        if self.config.last_opened_book.as_deref() != Some(self.book_name.as_str()) {
            self.config.last_opened_book = Some(self.book_name.clone());
            self.config_manager.save(&self.config)?;
        }
        Ok(())
    }

    // --- command handlers -------------------------------------------------

    fn cmd_help(&self) -> Result<(), CommandError> {
        output::section("Commands");
        let mut table = Table::new(vec![
            TableColumn::new("Command", Alignment::Left),
            TableColumn::new("Description", Alignment::Left),
        ]);
        for (name, help) in COMMANDS {
            table.push_row(vec![name.to_string(), help.to_string()]);
        }
        output::info(table.render());
        Ok(())
    }

    fn cmd_dashboard(&self) -> Result<(), CommandError> {
        let expenses = self.store.list();
        let currency = &self.config.settings.default_currency;

        output::section("Dashboard");
        let burn = SummaryService::monthly_burn(expenses);
        let active = expenses.iter().filter(|e| e.active).count();
        output::info(format!(
            "Monthly burn: {} across {} active expenses",
            format_money(burn, currency),
            active
        ));

        let summary = SummaryService::category_summary(expenses);
        if summary.is_empty() {
            output::info("No active expenses yet. Try `add` or `seed`.");
        } else {
            let mut table = Table::new(vec![
                TableColumn::new("Category", Alignment::Left),
                TableColumn::new("Total", Alignment::Right),
                TableColumn::new("Count", Alignment::Right),
                TableColumn::new("Share", Alignment::Right),
            ]);
            for entry in &summary {
                table.push_row(vec![
                    entry.category.label().to_string(),
                    format!("{:.2}", entry.total_amount),
                    entry.count.to_string(),
                    format!("{:.1}%", entry.percentage_of_total),
                ]);
            }
            output::info(table.render());
        }

        let window = self.config.settings.renewal_alert_days;
        let upcoming = RenewalService::upcoming_renewals(expenses, today(), window);
        output::section(format!("Renewals in the next {} days", window));
        if upcoming.is_empty() {
            output::info("Nothing coming up.");
        } else {
            for expense in &upcoming {
                if let Some(date) = expense.next_renewal {
                    output::info(format!(
                        "{}  {}  {}",
                        date,
                        expense.name,
                        format_money(expense.amount, &expense.currency)
                    ));
                }
            }
        }

        let suggestions = OptimizationService::suggestions(expenses);
        if !suggestions.is_empty() {
            output::separator();
            output::info(format!(
                "{} optimization suggestion(s) available; run `suggest`.",
                suggestions.len()
            ));
        }
        Ok(())
    }

    fn cmd_list(&self, args: &[&str]) -> Result<(), CommandError> {
        let mut filter = ExpenseFilter {
            active_only: true,
            ..Default::default()
        };
        let mut order = SortOrder::AmountDesc;

        let mut iter = args.iter().copied();
        while let Some(arg) = iter.next() {
            match arg {
                "--search" => {
                    filter.search = required_value(&mut iter, "--search")?.to_string();
                }
                "--category" => {
                    let raw = required_value(&mut iter, "--category")?;
                    filter.categories.push(parse_category(raw)?);
                }
                "--all" => filter.active_only = false,
                "--sort" => {
                    order = parse_sort(required_value(&mut iter, "--sort")?)?;
                }
                other => {
                    return Err(CommandError::Usage(format!(
                        "unexpected argument `{}`",
                        other
                    )))
                }
            }
        }

        let expenses = filter_and_sort(self.store.list(), &filter, order);
        if expenses.is_empty() {
            output::info("No expenses found. Try changing your filters.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            TableColumn::new("Id", Alignment::Left),
            TableColumn::new("Name", Alignment::Left),
            TableColumn::new("Amount", Alignment::Right),
            TableColumn::new("Category", Alignment::Left),
            TableColumn::new("Type", Alignment::Left),
            TableColumn::new("Next renewal", Alignment::Left),
            TableColumn::new("Active", Alignment::Left),
        ]);
        for expense in &expenses {
            table.push_row(vec![
                short_id(expense.id),
                expense.name.clone(),
                format!("{:.2}", expense.amount),
                expense.category.label().to_string(),
                match expense.kind {
                    ExpenseType::Recurring => expense
                        .billing_cycle
                        .map(|cycle| cycle.label().to_string())
                        .unwrap_or_else(|| "Recurring".to_string()),
                    ExpenseType::OneTime => "One-time".to_string(),
                },
                expense
                    .next_renewal
                    .map(|date| date.to_string())
                    .unwrap_or_default(),
                if expense.active { "yes" } else { "no" }.to_string(),
            ]);
        }
        output::info(table.render());
        output::blank_line();
        output::info(format!("{} expense(s).", expenses.len()));
        Ok(())
    }

    fn cmd_add(&mut self, args: &[&str]) -> Result<(), CommandError> {
        if args.len() < 3 {
            return Err(CommandError::Usage(
                "usage: add NAME AMOUNT CATEGORY [--one-time] [--cycle CYCLE] [--renews DATE] \
                 [--start DATE] [--currency CODE] [--desc TEXT] [--useful N] [--tag TAG]..."
                    .into(),
            ));
        }
        let name = args[0];
        let amount = parse_amount(args[1])?;
        let category = parse_category(args[2])?;

        let mut kind = ExpenseType::Recurring;
        let mut cycle = Some(BillingCycle::Monthly);
        let mut renews = None;
        let mut start = today();
        let mut currency = self.config.settings.default_currency.clone();
        let mut description = None;
        let mut usefulness = None;
        let mut tags: Vec<String> = Vec::new();

        let mut iter = args[3..].iter().copied();
        while let Some(arg) = iter.next() {
            match arg {
                "--one-time" => {
                    kind = ExpenseType::OneTime;
                    cycle = None;
                }
                "--cycle" => cycle = Some(parse_cycle(required_value(&mut iter, "--cycle")?)?),
                "--renews" => renews = Some(parse_date(required_value(&mut iter, "--renews")?)?),
                "--start" => start = parse_date(required_value(&mut iter, "--start")?)?,
                "--currency" => {
                    currency = required_value(&mut iter, "--currency")?.to_uppercase();
                }
                "--desc" => description = Some(required_value(&mut iter, "--desc")?.to_string()),
                "--useful" => {
                    usefulness = Some(parse_rating(required_value(&mut iter, "--useful")?)?);
                }
                "--tag" => tags.push(required_value(&mut iter, "--tag")?.to_string()),
                other => {
                    return Err(CommandError::Usage(format!(
                        "unexpected argument `{}`",
                        other
                    )))
                }
            }
        }

        let mut expense = Expense::new(name, amount, category, kind, start);
        expense.currency = currency;
        expense.billing_cycle = if kind == ExpenseType::Recurring {
            cycle
        } else {
            None
        };
        expense.next_renewal = if kind == ExpenseType::Recurring {
            renews
        } else {
            None
        };
        expense.description = description;
        expense.usefulness = usefulness;
        expense.tags = tags;

        let id = ExpenseService::add(&mut self.store, expense)?;
        self.persist()?;
        output::success(format!("Added `{}` ({}).", name, short_id(id)));
        Ok(())
    }

    fn cmd_edit(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let Some((selector, rest)) = args.split_first() else {
            return Err(CommandError::Usage(
                "usage: edit SELECTOR [--name TEXT] [--amount N] [--category NAME] [--cycle CYCLE] \
                 [--renews DATE] [--desc TEXT] [--useful N] [--notes TEXT]"
                    .into(),
            ));
        };
        let id = self.resolve_expense(selector)?;

        let mut patch = ExpensePatch::default();
        let mut iter = rest.iter().copied();
        while let Some(arg) = iter.next() {
            match arg {
                "--name" => patch.name = Some(required_value(&mut iter, "--name")?.to_string()),
                "--amount" => {
                    patch.amount = Some(parse_amount(required_value(&mut iter, "--amount")?)?);
                }
                "--category" => {
                    patch.category = Some(parse_category(required_value(&mut iter, "--category")?)?);
                }
                "--cycle" => {
                    patch.billing_cycle = Some(parse_cycle(required_value(&mut iter, "--cycle")?)?);
                }
                "--renews" => {
                    patch.next_renewal = Some(parse_date(required_value(&mut iter, "--renews")?)?);
                }
                "--desc" => {
                    patch.description = Some(required_value(&mut iter, "--desc")?.to_string());
                }
                "--useful" => {
                    patch.usefulness = Some(parse_rating(required_value(&mut iter, "--useful")?)?);
                }
                "--notes" => patch.notes = Some(required_value(&mut iter, "--notes")?.to_string()),
                other => {
                    return Err(CommandError::Usage(format!(
                        "unexpected argument `{}`",
                        other
                    )))
                }
            }
        }

        ExpenseService::edit(&mut self.store, id, patch)?;
        self.persist()?;
        output::success(format!("Updated {}.", short_id(id)));
        Ok(())
    }

    fn cmd_remove(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let Some(selector) = args.first() else {
            return Err(CommandError::Usage("usage: remove SELECTOR".into()));
        };
        let id = self.resolve_expense(selector)?;
        let (name, label) = self
            .store
            .get(id)
            .map(|expense| (expense.name().to_string(), expense.display_label()))
            .unwrap_or_default();

        let confirmed = if self.mode == CliMode::Script {
            true
        } else {
            Confirm::with_theme(&self.theme)
                .with_prompt(format!("Permanently delete {}?", label))
                .default(false)
                .interact()?
        };
        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }

        ExpenseService::remove(&mut self.store, id)?;
        self.persist()?;
        output::success(format!("Removed `{}`.", name));
        Ok(())
    }

    fn cmd_toggle(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let Some(selector) = args.first() else {
            return Err(CommandError::Usage("usage: toggle SELECTOR".into()));
        };
        let id = self.resolve_expense(selector)?;
        let active = ExpenseService::toggle_active(&mut self.store, id)?;
        self.persist()?;
        output::success(format!(
            "Expense {} is now {}.",
            short_id(id),
            if active { "active" } else { "inactive" }
        ));
        Ok(())
    }

    fn cmd_renewals(&self, args: &[&str]) -> Result<(), CommandError> {
        let mut window = DEFAULT_WINDOW_DAYS;
        let mut iter = args.iter().copied();
        while let Some(arg) = iter.next() {
            match arg {
                "--days" => {
                    let raw = required_value(&mut iter, "--days")?;
                    window = raw.parse().map_err(|_| {
                        CommandError::Usage(format!("`{}` is not a day count", raw))
                    })?;
                }
                other => {
                    return Err(CommandError::Usage(format!(
                        "unexpected argument `{}`",
                        other
                    )))
                }
            }
        }

        let upcoming = RenewalService::upcoming_renewals(self.store.list(), today(), window);
        output::section(format!("Renewals in the next {} days", window));
        if upcoming.is_empty() {
            output::info("Nothing coming up.");
            return Ok(());
        }
        let mut table = Table::new(vec![
            TableColumn::new("Date", Alignment::Left),
            TableColumn::new("Name", Alignment::Left),
            TableColumn::new("Amount", Alignment::Right),
            TableColumn::new("Cycle", Alignment::Left),
        ]);
        let mut total = 0.0;
        for expense in &upcoming {
            total += expense.amount;
            table.push_row(vec![
                expense
                    .next_renewal
                    .map(|date| date.to_string())
                    .unwrap_or_default(),
                expense.name.clone(),
                format!("{:.2}", expense.amount),
                expense
                    .billing_cycle
                    .map(|cycle| cycle.label().to_string())
                    .unwrap_or_default(),
            ]);
        }
        output::info(table.render());
        output::info(format!(
            "{} renewal(s), total {}.",
            upcoming.len(),
            format_money(total, &self.config.settings.default_currency)
        ));
        Ok(())
    }

    fn cmd_calendar(&self, args: &[&str]) -> Result<(), CommandError> {
        let reference = match args.first() {
            Some(raw) => parse_month(raw)?,
            None => today(),
        };
        let view =
            CalendarService::month_view(self.store.list(), reference.year(), reference.month());

        output::section(format!("Renewal calendar — {}", view.label));
        output::info(format!(
            "{} renewal(s) this month, total {}.",
            view.events.len(),
            format_money(view.total, &self.config.settings.default_currency)
        ));
        for event in &view.events {
            if let Some(date) = event.next_renewal {
                output::info(format!(
                    "{}  {}  {}",
                    date,
                    event.name,
                    format_money(event.amount, &event.currency)
                ));
            }
        }

        let upcoming = CalendarService::upcoming_months(self.store.list(), reference, 6);
        if upcoming.is_empty() {
            output::info("No renewals in the next six months.");
            return Ok(());
        }
        output::section("Upcoming months");
        for group in &upcoming {
            output::info(format!("{} — {} renewal(s)", group.label, group.events.len()));
            for event in &group.events {
                if let Some(date) = event.next_renewal {
                    output::info(format!(
                        "  {}  {}  {}",
                        date,
                        event.name,
                        format_money(event.amount, &event.currency)
                    ));
                }
            }
        }
        Ok(())
    }

    fn cmd_trend(&self) -> Result<(), CommandError> {
        let history = SummaryService::monthly_history(self.store.list(), today(), 6);
        output::section("Six-month trend");
        let mut columns = vec![
            TableColumn::new("Month", Alignment::Left),
            TableColumn::new("Total", Alignment::Right),
        ];
        for category in ExpenseCategory::ALL {
            columns.push(TableColumn::new(category.label(), Alignment::Right));
        }
        let mut table = Table::new(columns);
        for month in &history {
            let mut row = vec![month.label.clone(), format!("{:.2}", month.total)];
            for category in ExpenseCategory::ALL {
                row.push(format!("{:.2}", month.by_category.amount(category)));
            }
            table.push_row(row);
        }
        output::info(table.render());
        Ok(())
    }

    fn cmd_suggest(&self) -> Result<(), CommandError> {
        let suggestions = OptimizationService::suggestions(self.store.list());
        output::section("Optimization suggestions");
        if suggestions.is_empty() {
            output::info("Nothing to optimize right now.");
            return Ok(());
        }
        for entry in &suggestions {
            output::info(format!(
                "{}: {}",
                entry.expense.display_label(),
                entry.suggestion
            ));
        }
        Ok(())
    }

    fn cmd_export(&self, args: &[&str]) -> Result<(), CommandError> {
        let dir = match args.first() {
            Some(path) => std::path::PathBuf::from(path),
            None => paths::exports_dir(),
        };
        let path = export_expenses(self.store.list(), &dir, today())?;
        output::success(format!("Exported {} expense(s) to {}.",
            self.store.list().len(),
            path.display()
        ));
        Ok(())
    }

    fn cmd_seed(&mut self) -> Result<(), CommandError> {
        let added = seed_expenses(today())
            .into_iter()
            .map(|expense| self.store.add(expense))
            .count();
        self.persist()?;
        output::success(format!("Seeded {} sample expense(s).", added));
        Ok(())
    }

    fn cmd_settings(&mut self, args: &[&str]) -> Result<(), CommandError> {
        if args.is_empty() {
            let settings = &self.config.settings;
            output::section("Settings");
            output::info(format!("currency        {}", settings.default_currency));
            output::info(format!("alert-days      {}", settings.renewal_alert_days));
            output::info(format!(
                "notifications   {}",
                if settings.email_notifications { "on" } else { "off" }
            ));
            output::info(format!("theme           {}", settings.theme));
            return Ok(());
        }
        let [key, value] = args else {
            return Err(CommandError::Usage("usage: settings [KEY VALUE]".into()));
        };
        match *key {
            "currency" => self.config.settings.default_currency = value.to_uppercase(),
            "alert-days" => {
                self.config.settings.renewal_alert_days = value.parse().map_err(|_| {
                    CommandError::Usage(format!("`{}` is not a day count", value))
                })?;
            }
            "notifications" => {
                self.config.settings.email_notifications = match *value {
                    "on" | "true" => true,
                    "off" | "false" => false,
                    other => {
                        return Err(CommandError::Usage(format!(
                            "`{}` is not on/off",
                            other
                        )))
                    }
                };
            }
            "theme" => {
                self.config.settings.theme = match value.to_ascii_lowercase().as_str() {
                    "light" => ThemePreference::Light,
                    "dark" => ThemePreference::Dark,
                    "system" => ThemePreference::System,
                    other => {
                        return Err(CommandError::Usage(format!(
                            "`{}` is not light/dark/system",
                            other
                        )))
                    }
                };
            }
            other => {
                return Err(CommandError::Usage(format!(
                    "unknown setting `{}`; use currency, alert-days, notifications, or theme",
                    other
                )))
            }
        }
        self.config_manager.save(&self.config)?;
        output::success(format!("Set {} to {}.", key, value));
        Ok(())
    }

    /// Resolves a selector against the collection: full id, id prefix, or
    /// case-insensitive name.
    fn resolve_expense(&self, selector: &str) -> Result<Uuid, CommandError> {
        if let Ok(id) = Uuid::parse_str(selector) {
            if self.store.get(id).is_some() {
                return Ok(id);
            }
        }
        let lowered = selector.to_lowercase();
        let matches: Vec<&Expense> = self
            .store
            .list()
            .iter()
            .filter(|expense| {
                expense.id.to_string().starts_with(&lowered)
                    || expense.name.to_lowercase() == lowered
            })
            .collect();
        match matches.as_slice() {
            [] => Err(CommandError::NotFound(format!(
                "no expense matches `{}`",
                selector
            ))),
            [only] => Ok(only.id()),
            many => Err(CommandError::Usage(format!(
                "`{}` matches {} expenses; use the id",
                selector,
                many.len()
            ))),
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

fn format_money(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

fn required_value<'a, I>(iter: &mut I, flag: &str) -> Result<&'a str, CommandError>
where
    I: Iterator<Item = &'a str>,
{
    iter.next()
        .ok_or_else(|| CommandError::Usage(format!("{} needs a value", flag)))
}

fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    let amount: f64 = raw
        .parse()
        .map_err(|_| CommandError::Usage(format!("`{}` is not an amount", raw)))?;
    if amount < 0.0 {
        return Err(CommandError::Usage("amount must be non-negative".into()));
    }
    Ok(amount)
}

fn parse_rating(raw: &str) -> Result<u8, CommandError> {
    let rating: u8 = raw
        .parse()
        .map_err(|_| CommandError::Usage(format!("`{}` is not a rating", raw)))?;
    if !(1..=10).contains(&rating) {
        return Err(CommandError::Usage(
            "usefulness rating must be between 1 and 10".into(),
        ));
    }
    Ok(rating)
}

fn parse_category(raw: &str) -> Result<ExpenseCategory, CommandError> {
    ExpenseCategory::from_str(raw).map_err(CommandError::Usage)
}

fn parse_cycle(raw: &str) -> Result<BillingCycle, CommandError> {
    match raw.to_ascii_lowercase().as_str() {
        "monthly" => Ok(BillingCycle::Monthly),
        "quarterly" => Ok(BillingCycle::Quarterly),
        "yearly" | "annual" => Ok(BillingCycle::Yearly),
        "custom" => Ok(BillingCycle::Custom),
        other => Err(CommandError::Usage(format!(
            "`{}` is not a billing cycle (monthly/quarterly/yearly/custom)",
            other
        ))),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| CommandError::Usage(format!("`{}` is not a date (YYYY-MM-DD)", raw)))
}

fn parse_month(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d")
        .map_err(|_| CommandError::Usage(format!("`{}` is not a month (YYYY-MM)", raw)))
}

fn parse_sort(raw: &str) -> Result<SortOrder, CommandError> {
    match raw.to_ascii_lowercase().as_str() {
        "name-asc" => Ok(SortOrder::NameAsc),
        "name-desc" => Ok(SortOrder::NameDesc),
        "amount-asc" => Ok(SortOrder::AmountAsc),
        "amount-desc" => Ok(SortOrder::AmountDesc),
        "date-asc" => Ok(SortOrder::StartDateAsc),
        "date-desc" => Ok(SortOrder::StartDateDesc),
        other => Err(CommandError::Usage(format!(
            "`{}` is not a sort key (name/amount/date + -asc/-desc)",
            other
        ))),
    }
}

/// Sample data in the shape of a typical solo-founder stack, with renewal
/// dates spread over the next weeks so the calendar views have content.
fn seed_expenses(today: NaiveDate) -> Vec<Expense> {
    vec![
        Expense::new(
            "Vercel",
            20.0,
            ExpenseCategory::Development,
            ExpenseType::Recurring,
            today - Duration::days(400),
        )
        .with_description("Pro plan for hosting")
        .with_billing_cycle(BillingCycle::Monthly)
        .with_next_renewal(today + Duration::days(14))
        .with_tags(["hosting", "nextjs"])
        .with_usefulness(9),
        Expense::new(
            "Supabase",
            25.0,
            ExpenseCategory::Development,
            ExpenseType::Recurring,
            today - Duration::days(360),
        )
        .with_description("Pro plan for database")
        .with_billing_cycle(BillingCycle::Monthly)
        .with_next_renewal(today + Duration::days(19))
        .with_tags(["database", "backend"])
        .with_usefulness(8),
        Expense::new(
            "GitHub",
            4.0,
            ExpenseCategory::Development,
            ExpenseType::Recurring,
            today - Duration::days(700),
        )
        .with_description("Pro plan")
        .with_billing_cycle(BillingCycle::Monthly)
        .with_next_renewal(today + Duration::days(4))
        .with_usefulness(10),
        Expense::new(
            "OpenAI API",
            50.0,
            ExpenseCategory::Ai,
            ExpenseType::Recurring,
            today - Duration::days(500),
        )
        .with_description("Model API usage")
        .with_billing_cycle(BillingCycle::Monthly)
        .with_next_renewal(today + Duration::days(1))
        .with_notes("Variable cost based on usage")
        .with_tags(["api", "llm"])
        .with_usefulness(9),
        Expense::new(
            "subtracker.dev",
            12.0,
            ExpenseCategory::Domains,
            ExpenseType::Recurring,
            today - Duration::days(500),
        )
        .with_description("Domain renewal")
        .with_billing_cycle(BillingCycle::Yearly)
        .with_next_renewal(today + Duration::days(180))
        .with_tags(["domain"])
        .with_usefulness(10),
        Expense::new(
            "Figma",
            15.0,
            ExpenseCategory::Design,
            ExpenseType::Recurring,
            today - Duration::days(700),
        )
        .with_description("Professional plan")
        .with_billing_cycle(BillingCycle::Monthly)
        .with_next_renewal(today + Duration::days(11))
        .with_tags(["design", "ui"])
        .with_usefulness(8),
        Expense::new(
            "ConvertKit",
            29.0,
            ExpenseCategory::Marketing,
            ExpenseType::Recurring,
            today - Duration::days(150),
        )
        .with_description("Creator plan")
        .with_billing_cycle(BillingCycle::Monthly)
        .with_next_renewal(today + Duration::days(17))
        .with_tags(["email", "marketing"])
        .with_usefulness(7),
        Expense::new(
            "Tailwind UI",
            149.0,
            ExpenseCategory::Design,
            ExpenseType::OneTime,
            today - Duration::days(200),
        )
        .with_description("Component library")
        .with_tags(["ui", "components"])
        .with_usefulness(9),
        Expense::new(
            "Mixpanel",
            25.0,
            ExpenseCategory::Marketing,
            ExpenseType::Recurring,
            today - Duration::days(100),
        )
        .with_description("Growth plan")
        .with_billing_cycle(BillingCycle::Monthly)
        .with_next_renewal(today + Duration::days(7))
        .with_tags(["analytics"])
        .with_usefulness(6),
        Expense::new(
            "Claude API",
            30.0,
            ExpenseCategory::Ai,
            ExpenseType::Recurring,
            today - Duration::days(90),
        )
        .with_description("AI assistant integration")
        .with_billing_cycle(BillingCycle::Monthly)
        .with_next_renewal(today + Duration::days(13))
        .with_tags(["api", "llm"])
        .with_usefulness(8),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_data_has_content_for_every_view() {
        let today = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let seeded = seed_expenses(today);
        assert_eq!(seeded.len(), 10);
        assert!(SummaryService::monthly_burn(&seeded) > 0.0);
        assert!(!RenewalService::upcoming_renewals(&seeded, today, 30).is_empty());
        assert!(!OptimizationService::suggestions(&seeded).is_empty());
    }

    #[test]
    fn sort_keys_parse() {
        assert_eq!(parse_sort("amount-desc").unwrap(), SortOrder::AmountDesc);
        assert_eq!(parse_sort("NAME-ASC").unwrap(), SortOrder::NameAsc);
        assert!(parse_sort("sideways").is_err());
    }

    #[test]
    fn month_parsing_accepts_year_dash_month() {
        assert_eq!(
            parse_month("2025-07").unwrap(),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
        );
        assert!(parse_month("July").is_err());
    }
}
