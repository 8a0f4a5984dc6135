/// End-to-end pipeline tests: file on disk → RenderContext → report.
use std::fs;
use std::path::{Path, PathBuf};

use bioscope::data::loader::write_csv;
use bioscope::data::source::{DataSource, SAMPLE_NOTICE};
use bioscope::data::synthetic::sample_dataset;
use bioscope::insights::{ExpressionOutlook, Fragment, MutationOutlook};
use bioscope::{PipelineError, RenderContext};
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ---------------------------------------------------------------------------
// Uploaded files
// ---------------------------------------------------------------------------

#[test]
fn uploaded_csv_drives_statistics_and_insights() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "genes.csv",
        "Gene,Expression_Level,Mutation_Rate,Category\nGene_1,10,0.2,A\nGene_2,20,0.8,B\n",
    );

    let ctx = RenderContext::build(Some(path.as_path())).unwrap();
    assert_eq!(ctx.source, DataSource::Uploaded(path.clone()));
    assert_eq!(ctx.statistics.mean_expression, 15.0);
    assert!((ctx.statistics.mean_mutation - 0.5).abs() < 1e-12);
    assert_eq!(ctx.statistics.top_expression_gene, "Gene_2");
    assert_eq!(ctx.statistics.top_mutation_gene, "Gene_2");
    assert_eq!(
        ctx.insights[4],
        Fragment::Expression(ExpressionOutlook::Moderate)
    );
    assert_eq!(ctx.insights[5], Fragment::Mutation(MutationOutlook::Normal));
    assert!(!ctx.report().contains(SAMPLE_NOTICE));
}

#[test]
fn high_expression_and_elevated_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "hot.tsv",
        "Gene\tExpression_Level\tMutation_Rate\tCategory\nTP53\t45\t0.9\tRegulatory\nMYC\t35\t0.7\tRegulatory\n",
    );

    let ctx = RenderContext::build(Some(path.as_path())).unwrap();
    assert_eq!(ctx.statistics.category_count, 1);
    assert_eq!(ctx.insights[4], Fragment::Expression(ExpressionOutlook::High));
    assert_eq!(ctx.insights[5], Fragment::Mutation(MutationOutlook::Elevated));
    assert!(ctx.report().contains("Highest expressed gene: **TP53**."));
}

#[test]
fn json_upload_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "genes.JSON",
        r#"[{"Gene": "G1", "Expression_Level": 30, "Mutation_Rate": 0.6, "Category": "Metabolic"}]"#,
    );

    let ctx = RenderContext::build(Some(path.as_path())).unwrap();
    assert_eq!(ctx.statistics.row_count, 1);
    assert_eq!(
        ctx.insights[4],
        Fragment::Expression(ExpressionOutlook::Moderate)
    );
    assert_eq!(ctx.insights[5], Fragment::Mutation(MutationOutlook::Normal));
}

// ---------------------------------------------------------------------------
// Fatal errors
// ---------------------------------------------------------------------------

#[test]
fn missing_category_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "no_category.csv",
        "Gene,Expression_Level,Mutation_Rate\nGene_1,10,0.2\n",
    );

    let err = RenderContext::build(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, PipelineError::Schema { .. }));
    assert_eq!(
        err.to_string(),
        "dataset is missing required column(s): Category"
    );
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "empty.csv",
        "Gene,Expression_Level,Mutation_Rate,Category\n",
    );

    assert!(matches!(
        RenderContext::build(Some(path.as_path())),
        Err(PipelineError::EmptyDataset)
    ));
}

#[test]
fn malformed_upload_never_falls_back_to_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "bad.csv",
        "Gene,Expression_Level,Mutation_Rate,Category\nGene_1,ten,0.2,A\n",
    );

    match RenderContext::build(Some(path.as_path())) {
        Err(PipelineError::Load(msg)) => {
            assert!(msg.contains("row 1"), "{msg}");
            assert!(msg.contains("Expression_Level"), "{msg}");
        }
        other => panic!("expected load error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_a_load_error() {
    let err = RenderContext::build(Some(Path::new("/nonexistent/genes.csv"))).unwrap_err();
    assert!(matches!(err, PipelineError::Load(_)));
}

// ---------------------------------------------------------------------------
// Synthetic fallback
// ---------------------------------------------------------------------------

#[test]
fn sample_fallback_is_deterministic() {
    let first = RenderContext::build(None).unwrap();
    let second = RenderContext::build(None).unwrap();
    assert_eq!(first.dataset, second.dataset);
    assert_eq!(first.statistics, second.statistics);
    assert_eq!(first.report(), second.report());
    assert!(first.report().contains(SAMPLE_NOTICE));
}

#[test]
fn generated_sample_file_reloads_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample_genes.csv");
    write_csv(&sample_dataset(), fs::File::create(&path).unwrap()).unwrap();

    let uploaded = RenderContext::build(Some(path.as_path())).unwrap();
    let fallback = RenderContext::build(None).unwrap();
    assert_eq!(uploaded.dataset, fallback.dataset);
    assert_eq!(uploaded.statistics, fallback.statistics);
    assert_eq!(uploaded.insights, fallback.insights);
}

#[test]
fn zero_row_sample_file_reloads_as_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty_sample.csv");
    let empty = bioscope::data::synthetic::generate(42, 0);
    write_csv(&empty, fs::File::create(&path).unwrap()).unwrap();

    assert!(matches!(
        RenderContext::build(Some(path.as_path())),
        Err(PipelineError::EmptyDataset)
    ));
}
