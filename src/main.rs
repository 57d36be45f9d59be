use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use df_language_mt::langfile::{
    BATCH_SIZE, LineTransformer, TransformStats, count_lines, output_path, validate_input_path,
};
use df_language_mt::mt::{
    GoogleTranslateProvider, MachineTranslator, MockMode, MockTranslator, ensure_supported,
};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("df-language-mt")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Machine-translate the T_WORD entries of a Dwarf Fortress language file")
        .arg(
            Arg::new("lang_file")
                .help("Language file to translate (e.g. language_DWARF.txt)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("lang_code")
                .help("Target language code (e.g. fr, de, zh-CN)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("source-locale")
                .long("source")
                .short('s')
                .help("Source language code")
                .default_value("en"),
        )
        .arg(
            Arg::new("batch-size")
                .long("batch-size")
                .short('b')
                .help("Lines per translation request")
                .value_parser(value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use mock translator instead of Google Translate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log each batch")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Hide the progress bar")
                .action(ArgAction::SetTrue),
        )
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn progress_bar(total: usize, output_name: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let bar = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{msg}: {percent}%|{bar:40}| {pos}/{len} [{elapsed_precise}<{eta_precise}]")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style);
    bar.set_message(format!("Translating {}", output_name));
    bar
}

async fn run(matches: &ArgMatches) -> Result<TransformStats, Box<dyn std::error::Error>> {
    let lang_file = matches
        .get_one::<String>("lang_file")
        .ok_or("missing lang_file argument")?;
    let lang_code = matches
        .get_one::<String>("lang_code")
        .ok_or("missing lang_code argument")?;
    let source_locale = matches
        .get_one::<String>("source-locale")
        .map(String::as_str)
        .unwrap_or("en");
    let batch_size = matches
        .get_one::<usize>("batch-size")
        .copied()
        .unwrap_or(BATCH_SIZE);

    // 1. Validate the file name before touching the file system
    let input = Path::new(lang_file);
    validate_input_path(input)?;
    let output = output_path(input, lang_code);

    // 2. Pick a provider and check the target language against its list
    let translator: Box<dyn MachineTranslator> = if matches.get_flag("mock") {
        Box::new(MockTranslator::new(MockMode::Suffix))
    } else {
        Box::new(GoogleTranslateProvider::from_env()?)
    };
    let languages = translator.supported_languages("en").await?;
    ensure_supported(lang_code, &languages)?;
    info!(
        provider = translator.provider_name(),
        source_locale,
        target_locale = %lang_code,
        "translating {}",
        input.display()
    );

    // 3. Translate, batch by batch
    let total = count_lines(input)?;
    let output_name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bar = progress_bar(total, &output_name, matches.get_flag("quiet"));

    let transformer = LineTransformer::new(translator.as_ref(), source_locale, lang_code)
        .with_batch_size(batch_size);
    let result = transformer
        .translate_file(input, &output, |_| bar.inc(1))
        .await;
    bar.finish();

    let stats = result?;
    if stats.missing > 0 {
        warn!(missing = stats.missing, "some markers were written as '?'");
    }
    info!(
        lines = stats.lines,
        markers = stats.markers,
        batches = stats.batches,
        "wrote {}",
        output.display()
    );
    Ok(stats)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match run(&matches).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let matches = cli()
            .try_get_matches_from(["df-language-mt", "language_DWARF.txt", "fr"])
            .unwrap();
        assert_eq!(matches.get_one::<String>("lang_code").unwrap(), "fr");
        assert_eq!(matches.get_one::<String>("source-locale").unwrap(), "en");
        assert_eq!(*matches.get_one::<usize>("batch-size").unwrap(), BATCH_SIZE);
        assert!(!matches.get_flag("mock"));
    }

    #[test]
    fn test_cli_requires_both_positionals() {
        assert!(cli().try_get_matches_from(["df-language-mt", "language_DWARF.txt"]).is_err());
    }

    #[tokio::test]
    async fn test_run_rejects_invalid_file_name() {
        let matches = cli()
            .try_get_matches_from(["df-language-mt", "--mock", "notes.txt", "fr"])
            .unwrap();
        let err = run(&matches).await.unwrap_err();
        assert!(err.to_string().contains("not a valid language file"));
    }

    #[tokio::test]
    async fn test_run_rejects_unknown_language() {
        let matches = cli()
            .try_get_matches_from(["df-language-mt", "--mock", "language_DWARF.txt", "xx"])
            .unwrap();
        let err = run(&matches).await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("not recognised"));
        assert!(msg.contains("fr (French)"));
        assert!(msg.contains("zh-CN (Chinese (Simplified))"));
    }

    #[tokio::test]
    async fn test_run_with_mock_translator() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("language_ELF.txt");
        std::fs::write(&input, "[T_WORD:fire:old]\nplain\n").unwrap();

        let matches = cli()
            .try_get_matches_from([
                "df-language-mt",
                "--mock",
                "--quiet",
                input.to_str().unwrap(),
                "fr",
            ])
            .unwrap();
        let stats = run(&matches).await.unwrap();

        assert_eq!(stats.markers, 1);
        let written = std::fs::read_to_string(dir.path().join("language_ELF-fr.txt")).unwrap();
        assert_eq!(written, "[T_WORD:fire:fire_fr]\nplain\n");
    }
}
