use clap::Parser;
use testlink2zentao::cli::{run_batch, run_conversion, ConversionOptions};
use testlink2zentao::generator::{ColumnLayout, OutputType};
use testlink2zentao::labels::Locale;
use testlink2zentao::suite::ModuleStyle;
use testlink2zentao::{get_generator_types, get_parser_types};

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Type of output
    #[arg(short = 't', long, value_enum, default_value_t = OutputType::Csv)]
    to_type: OutputType,

    /// Column layout (default: template for csv, import for xlsx)
    #[arg(long, value_enum)]
    layout: Option<ColumnLayout>,

    /// Module path style (default: wrapped for csv, plain for xlsx)
    #[arg(long, value_enum)]
    module_style: Option<ModuleStyle>,

    /// Language of headers and fixed values; ZenTao in Chinese expects `zh`
    #[arg(long, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Input file (default: stdin). A directory converts every .xml file in it.
    input: Option<String>,

    /// Output file (default: stdout). Ignored for a directory input.
    output: Option<String>,

    /// List available input/output types
    #[arg(short = 'l', long)]
    list_type: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.list_type {
        println!("type of input:");
        println!("{}", get_parser_types().join(" "));
        println!();
        println!("type of output:");
        println!("{}", get_generator_types().join(" "));
        println!();
        return Ok(());
    }

    let mut options = ConversionOptions::new(cli.to_type, cli.locale);
    if let Some(layout) = cli.layout {
        options.layout = layout;
    }
    if let Some(module_style) = cli.module_style {
        options.module_style = module_style;
    }

    if let Some(dir) = cli.input.as_deref().map(Path::new).filter(|p| p.is_dir()) {
        if cli.output.is_some() {
            log::warn!("Output path is ignored when the input is a directory");
        }
        let report = run_batch(dir, &options)?;
        log::info!(
            "{} converted, {} failed",
            report.converted.len(),
            report.failed.len()
        );
        if !report.is_success() {
            anyhow::bail!("{} document(s) failed to convert", report.failed.len());
        }
        return Ok(());
    }

    let input_content = match cli.input.as_deref() {
        Some(path) if path != "-" => fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    // Convert into memory first so a failed document leaves no output file.
    let mut buffer = Vec::new();
    let count = run_conversion(&input_content, &mut buffer, &options)?;

    let mut output_writer: Box<dyn Write> = match cli.output {
        Some(path) if path != "-" => Box::new(File::create(path)?),
        _ => Box::new(io::stdout()),
    };
    output_writer.write_all(&buffer)?;
    output_writer.flush()?;

    log::info!("Converted {} test cases", count);
    Ok(())
}
