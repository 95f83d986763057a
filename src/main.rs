use std::fs;
use std::path::Path;

use clap::Parser;

use intake_board::cli::{
    Cli, ColorChoice, Commands, ConfigAction, ConfigArgs, InitArgs, PeriodArg, RenderArgs,
};
use intake_board::config::{Config, ConfigLoader, FileConfigLoader};
use intake_board::model::{self, Period};
use intake_board::output::{
    ColorMode, DashboardFormatter, HtmlFormatter, JsonFormatter, OutputFormat, TextFormatter,
};
use intake_board::{EXIT_CONFIG_ERROR, EXIT_KPI_ALERT, EXIT_SUCCESS, IntakeBoardError};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

const fn period_arg_to_period(arg: PeriodArg) -> Period {
    match arg {
        PeriodArg::Today => Period::Today,
        PeriodArg::Week => Period::Week,
        PeriodArg::Month => Period::Month,
        PeriodArg::Quarter => Period::Quarter,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args),
    };

    std::process::exit(exit_code);
}

fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_render_impl(args: &RenderArgs, cli: &Cli) -> intake_board::Result<i32> {
    // 1. Load and validate configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    config.validate()?;

    // 2. Assemble the dashboard and apply config overrides
    let mut board = model::dashboard(period_arg_to_period(args.period));
    config.apply(&mut board);

    // 3. Format: CLI flag wins over the config default
    let format = args.format.unwrap_or_else(|| config.default_format());
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(format, &board, color_mode, cli.verbose)?;

    // 4. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 5. Exit code: strict mode surfaces KPI breaches to CI
    if args.strict && board.has_kpi_alerts() {
        Ok(EXIT_KPI_ALERT)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> intake_board::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn format_output(
    format: OutputFormat,
    board: &model::Dashboard,
    color_mode: ColorMode,
    verbose: u8,
) -> intake_board::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(board),
        OutputFormat::Json => JsonFormatter.format(board),
        OutputFormat::Html => HtmlFormatter.format(board),
    }
}

fn write_output(path: Option<&Path>, output: &str, quiet: bool) -> intake_board::Result<()> {
    match path {
        Some(path) => {
            fs::write(path, output)?;
            if !quiet {
                println!("Report written to {}", path.display());
            }
        }
        None => println!("{output}"),
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> intake_board::Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(IntakeBoardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

fn config_template() -> &'static str {
    r##"# intake-board configuration file

[report]
# Report identity shown in the page header and footer
# title = "Cargo Intake Monitoring"
# subtitle = "Warehouse receiving process controlling"
# owner = "Warehouse manager"

[output]
# Default output format: text, json, or html
format = "text"

# Chart color overrides, keyed by entry label
# [palette]
# "Waiting for documents" = "#2563eb"
# "Other" = "#94a3b8"
"##
}

fn run_config(args: &ConfigArgs) -> i32 {
    match run_config_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_impl(args: &ConfigArgs) -> intake_board::Result<()> {
    match &args.action {
        ConfigAction::Validate { config } => {
            let loaded = FileConfigLoader::new().load_from_path(config)?;
            loaded.validate()?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        ConfigAction::Show { config, format } => {
            let loaded = load_config(config.as_deref(), false)?;
            show_config(&loaded, format)
        }
    }
}

fn show_config(config: &Config, format: &str) -> intake_board::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(config)?),
        "text" => {
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| IntakeBoardError::Config(e.to_string()))?;
            print!("{rendered}");
        }
        other => {
            return Err(IntakeBoardError::Config(format!(
                "Unknown config show format: {other}"
            )));
        }
    }
    Ok(())
}
