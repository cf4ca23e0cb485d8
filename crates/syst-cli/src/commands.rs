use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use syst_meta::io::{self, MetaDataFormat};
use syst_meta::{
    HeaderValidator, MetaDataSummary, MetadataMerger, ReportSummary, SystConfig,
    TracingDiagnostics,
};
use syst_types::SystMetaData;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Validate(args) => cmd_validate(args, cli.format),
        Command::Show(args) => cmd_show(args, cli.format),
        Command::Merge(args) => cmd_merge(args, cli.format),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SystConfig> {
    match path {
        Some(path) => SystConfig::load(path)
            .with_context(|| format!("reading config {}", path.display())),
        None => Ok(SystConfig::default()),
    }
}

fn load_metadata(path: &Path) -> anyhow::Result<SystMetaData> {
    io::load(path).with_context(|| format!("reading {}", path.display()))
}

fn cmd_validate(args: ValidateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let md = load_metadata(&args.file)?;
    let report = HeaderValidator::new(config.validation).validate(&md);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            let mark = if report.is_valid() { "✓".green().bold() } else { "✗".red().bold() };
            println!("{mark} {}: {}", args.file.display(), ReportSummary(&report));
        }
    }

    if !report.is_valid() {
        anyhow::bail!("{} is invalid", args.file.display());
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, format: OutputFormat) -> anyhow::Result<()> {
    let md = load_metadata(&args.file)?;
    match format {
        OutputFormat::Json => println!("{}", io::render(&md, MetaDataFormat::Json)?),
        OutputFormat::Text => println!("{}", MetaDataSummary(&md)),
    }
    Ok(())
}

/// Load `target` and merge every source into it, in argument order.
pub(crate) fn merge_files(args: &MergeArgs, config: &SystConfig) -> anyhow::Result<SystMetaData> {
    let merger = MetadataMerger::new(
        HeaderValidator::new(config.validation.clone()),
        TracingDiagnostics,
    )
    .with_config(config.merge.clone());

    let mut merged = load_metadata(&args.target)?;
    for source in &args.sources {
        let md = load_metadata(source)?;
        let summary = merger
            .merge(&mut merged, &md)
            .with_context(|| format!("merging {} into {}", source.display(), args.target.display()))?;
        tracing::info!(
            source = %source.display(),
            appended = summary.appended,
            total = summary.total,
            "merged"
        );
    }
    Ok(merged)
}

fn cmd_merge(args: MergeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let merged = merge_files(&args, &config)?;

    match &args.output {
        Some(path) => {
            io::save(&merged, path).with_context(|| format!("writing {}", path.display()))?;
            eprintln!(
                "{} Merged {} parameter headers into {}",
                "✓".green().bold(),
                merged.len().to_string().bold(),
                path.display().to_string().yellow()
            );
        }
        None => println!("{}", io::render(&merged, stdout_format(&args, format))?),
    }
    Ok(())
}

/// Standard output is TOML for text mode, unless any input was JSON: JSON
/// payload may hold nulls that TOML cannot represent.
fn stdout_format(args: &MergeArgs, format: OutputFormat) -> MetaDataFormat {
    let any_json_input = std::iter::once(&args.target)
        .chain(&args.sources)
        .any(|path| matches!(MetaDataFormat::from_path(path), Ok(MetaDataFormat::Json)));
    match format {
        OutputFormat::Json => MetaDataFormat::Json,
        OutputFormat::Text if any_json_input => MetaDataFormat::Json,
        OutputFormat::Text => MetaDataFormat::Toml,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use syst_meta::{MergeError, MetaDataError};
    use syst_types::ParamHeader;

    use super::*;

    fn write(dir: &Path, name: &str, ids: &[&str]) -> PathBuf {
        let md: SystMetaData = ids
            .iter()
            .map(|id| ParamHeader::new(*id).with_variations([-1.0, 1.0]))
            .collect();
        let path = dir.join(name);
        io::save(&md, &path).unwrap();
        path
    }

    fn merge_args(target: PathBuf, sources: Vec<PathBuf>) -> MergeArgs {
        MergeArgs {
            target,
            sources,
            output: None,
            config: None,
        }
    }

    #[test]
    fn parses_merge_command() {
        let cli = Cli::try_parse_from([
            "syst", "merge", "a.toml", "b.toml", "c.json", "-o", "out.json", "--verbose",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Command::Merge(args) => {
                assert_eq!(args.target, PathBuf::from("a.toml"));
                assert_eq!(args.sources.len(), 2);
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
            }
            _ => panic!("expected merge"),
        }
    }

    #[test]
    fn merge_requires_a_source() {
        assert!(Cli::try_parse_from(["syst", "merge", "a.toml"]).is_err());
    }

    #[test]
    fn parses_json_format() {
        let cli = Cli::try_parse_from(["syst", "--format", "json", "show", "a.json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn merges_sources_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let args = merge_args(
            write(dir.path(), "flux.toml", &["flux_1", "flux_2"]),
            vec![
                write(dir.path(), "xsec.json", &["xsec_1"]),
                write(dir.path(), "det.toml", &["det_1"]),
            ],
        );

        let merged = merge_files(&args, &SystConfig::default()).unwrap();

        let ids: Vec<&str> = merged.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["flux_1", "flux_2", "xsec_1", "det_1"]);
    }

    #[test]
    fn collision_surfaces_merge_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = merge_args(
            write(dir.path(), "a.toml", &["flux_1"]),
            vec![write(dir.path(), "b.toml", &["flux_1"])],
        );

        let err = merge_files(&args, &SystConfig::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<MergeError>(),
            Some(MergeError::IdentifierCollision { .. })
        ));
    }

    #[test]
    fn merge_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("merged.json");
        let mut args = merge_args(
            write(dir.path(), "a.toml", &["flux_1"]),
            vec![write(dir.path(), "b.toml", &["xsec_1"])],
        );
        args.output = Some(out.clone());

        cmd_merge(args, OutputFormat::Text).unwrap();

        assert_eq!(io::load(&out).unwrap().len(), 2);
    }

    #[test]
    fn validate_fails_on_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let file = write(dir.path(), "dup.toml", &["a", "a"]);
        let args = ValidateArgs { file, config: None };
        assert!(cmd_validate(args, OutputFormat::Json).is_err());
    }

    fn write_with_null_opt(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(
            &path,
            r#"{"headers": [{"syst_param_id": "flux_1", "param_variations": [-1.0, 1.0],
                             "opts": {"note": null}}]}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn json_input_switches_text_stdout_to_json() {
        let args = merge_args(
            PathBuf::from("a.toml"),
            vec![PathBuf::from("b.toml"), PathBuf::from("c.json")],
        );
        assert_eq!(stdout_format(&args, OutputFormat::Text), MetaDataFormat::Json);

        let toml_only = merge_args(PathBuf::from("a.toml"), vec![PathBuf::from("b.toml")]);
        assert_eq!(stdout_format(&toml_only, OutputFormat::Text), MetaDataFormat::Toml);
        assert_eq!(stdout_format(&toml_only, OutputFormat::Json), MetaDataFormat::Json);
    }

    #[test]
    fn null_opt_from_json_input_merges_to_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let args = merge_args(
            write_with_null_opt(dir.path(), "a.json"),
            vec![write(dir.path(), "b.json", &["xsec_1"])],
        );

        cmd_merge(args, OutputFormat::Text).unwrap();
    }

    #[test]
    fn null_opt_is_kept_in_json_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("merged.json");
        let mut args = merge_args(
            write_with_null_opt(dir.path(), "a.json"),
            vec![write(dir.path(), "b.json", &["xsec_1"])],
        );
        args.output = Some(out.clone());

        cmd_merge(args, OutputFormat::Text).unwrap();

        let merged = io::load(&out).unwrap();
        assert_eq!(merged.get("flux_1").unwrap().opts["note"], serde_json::Value::Null);
    }

    #[test]
    fn null_opt_names_header_and_key_when_writing_toml() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = merge_args(
            write_with_null_opt(dir.path(), "a.json"),
            vec![write(dir.path(), "b.json", &["xsec_1"])],
        );
        args.output = Some(dir.path().join("merged.toml"));

        let err = cmd_merge(args, OutputFormat::Text).unwrap_err();

        match err.downcast_ref::<MetaDataError>() {
            Some(MetaDataError::UnrepresentableOpt { id, key, .. }) => {
                assert_eq!(id.as_str(), "flux_1");
                assert_eq!(key, "note");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validation_report_prints_as_json() {
        let md: SystMetaData = ["a", "a"]
            .into_iter()
            .map(|id| ParamHeader::new(id).with_variations([0.0]))
            .collect();
        let report = HeaderValidator::default().validate(&md);
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string_pretty(&report).unwrap()).unwrap();
        assert_eq!(json["violations"][0]["kind"], "duplicate-id");
        assert_eq!(json["violations"][0]["param_id"], "a");
        assert_eq!(json["violations"][0]["index"], 1);
    }
}
