use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Args;
use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};
use tracing::info;

use item_form::{
    items::ItemDraft,
    services::ReservedCodes,
    validation::{DraftErrors, validate},
};

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    /// Draft to validate (YAML)
    #[arg(long)]
    draft: PathBuf,

    /// Item the draft was edited from (YAML); its unchanged codes are not re-checked
    #[arg(long)]
    baseline: Option<PathBuf>,

    /// Variant codes already used by other items
    #[arg(long, value_delimiter = ',')]
    taken: Vec<String>,
}

pub(crate) async fn run(args: CheckArgs) -> Result<ExitCode, String> {
    Ok(if check_draft(args).await? {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

async fn check_draft(args: CheckArgs) -> Result<bool, String> {
    let draft = load_draft(&args.draft)?;
    let baseline = args.baseline.as_deref().map(load_draft).transpose()?;
    let codes = ReservedCodes::new(args.taken);

    let errors = validate(&draft, baseline.as_ref(), &codes)
        .await
        .map_err(|error| format!("code check failed: {error}"))?;

    info!(path = %args.draft.display(), valid = errors.is_valid(), "checked draft");

    write_report(&mut io::stdout().lock(), &errors)
        .map_err(|error| format!("failed to write report: {error}"))?;

    Ok(errors.is_valid())
}

fn load_draft(path: &Path) -> Result<ItemDraft, String> {
    let contents = fs::read_to_string(path)
        .map_err(|error| format!("failed to read {}: {error}", path.display()))?;

    serde_norway::from_str::<ItemDraft>(&contents)
        .map(ItemDraft::normalized)
        .map_err(|error| format!("failed to parse {}: {error}", path.display()))
}

fn write_report(out: &mut impl Write, errors: &DraftErrors) -> io::Result<()> {
    if errors.is_valid() {
        return writeln!(out, "draft is valid");
    }

    let mut builder = Builder::default();
    builder.push_record(["field", "problem"]);

    for path in errors.paths() {
        let problem = describe(&path);
        builder.push_record([path, problem.to_owned()]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}")
}

fn describe(path: &str) -> &'static str {
    if path.ends_with("code") {
        "missing or already taken"
    } else if path.ends_with("price") || path.ends_with("Price") || path.ends_with("quantity") {
        "negative"
    } else {
        "missing"
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use item_form::validation::VariantErrors;

    use super::*;

    #[test]
    fn describe_names_the_problem() {
        assert_eq!(describe("variants[2].code"), "missing or already taken");
        assert_eq!(describe("sellingPrice"), "negative");
        assert_eq!(describe("variants[0].stock[1].quantity"), "negative");
        assert_eq!(describe("variants[0].color"), "missing");
    }

    #[test]
    fn report_lists_each_violation() -> TestResult {
        let mut errors = DraftErrors {
            name: true,
            ..DraftErrors::default()
        };
        errors.insert_variant(
            1,
            VariantErrors {
                code: true,
                ..VariantErrors::default()
            },
        );

        let mut out = Vec::new();
        write_report(&mut out, &errors)?;
        let report = String::from_utf8(out)?;

        assert!(report.contains("name"), "report: {report}");
        assert!(report.contains("variants[1].code"), "report: {report}");
        assert!(report.contains("missing or already taken"), "report: {report}");

        Ok(())
    }

    #[test]
    fn valid_report_is_one_line() -> TestResult {
        let mut out = Vec::new();
        write_report(&mut out, &DraftErrors::default())?;

        assert_eq!(String::from_utf8(out)?, "draft is valid\n");

        Ok(())
    }

    #[tokio::test]
    async fn check_flags_taken_code_from_file() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("draft.yaml");

        fs::write(
            &path,
            "name: Shoe\nvariants:\n  - color: Red\n    code: SHOE-RED\n    stock:\n      - size: '42'\n        quantity: 5\n",
        )?;

        let taken = check_draft(CheckArgs {
            draft: path.clone(),
            baseline: None,
            taken: vec!["SHOE-RED".to_owned()],
        })
        .await?;

        let free = check_draft(CheckArgs {
            draft: path,
            baseline: None,
            taken: Vec::new(),
        })
        .await?;

        assert!(!taken, "taken code should fail the check");
        assert!(free, "free code should pass the check");

        Ok(())
    }
}
