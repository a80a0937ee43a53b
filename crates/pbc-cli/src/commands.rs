use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span, warn};

use pbc_ingest::{ReadOptions, read_trial_balance_with};
use pbc_map::{
    CategoryDictionary, LedgerClassifier, build_pbc_items, builtin_dictionary, dictionary_path,
};
use pbc_model::{ClassifierOptions, ColumnSelection, ConfidenceThreshold};
use pbc_report::{MappingReport, write_outputs};

use crate::cli::{CategoriesArgs, ClassifyArgs, DictionaryArgs, ExplainArgs};
use crate::logging::redact_value;
use crate::summary::{apply_table_style, explain_table, header_cell};
use crate::types::ClassifyResult;

/// Loads the dictionary named by `--dictionary` or `$PBC_DICTIONARY`.
///
/// `None` means the built-in dictionary applies.
pub fn load_dictionary(args: &DictionaryArgs) -> Result<Option<CategoryDictionary>> {
    let Some(path) = dictionary_path(args.dictionary.as_deref()) else {
        return Ok(None);
    };
    let dictionary = CategoryDictionary::load(&path)
        .with_context(|| format!("load dictionary {}", path.display()))?;
    info!(path = %path.display(), categories = dictionary.len(), "loaded dictionary");
    Ok(Some(dictionary))
}

fn active_dictionary(loaded: Option<&CategoryDictionary>) -> &CategoryDictionary {
    match loaded {
        Some(dictionary) => dictionary,
        None => builtin_dictionary(),
    }
}

fn column_selection(args: &ClassifyArgs) -> ColumnSelection {
    let mut selection = ColumnSelection::auto();
    if let Some(column) = &args.ledger_column {
        selection = selection.with_ledger(column);
    }
    if let Some(column) = &args.debit_column {
        selection = selection.with_debit(column);
    }
    if let Some(column) = &args.credit_column {
        selection = selection.with_credit(column);
    }
    selection
}

pub fn classifier_options(args: &ClassifyArgs) -> Result<ClassifierOptions> {
    let threshold = ConfidenceThreshold::new(args.threshold).context("invalid threshold")?;
    Ok(ClassifierOptions::new()
        .with_threshold(threshold)
        .with_audit_type(args.audit_type.into())
        .with_accounting_standard(args.accounting_standard.into()))
}

pub fn run_classify(args: &ClassifyArgs) -> Result<ClassifyResult> {
    let span = info_span!("classify", file = %args.file.display());
    let _guard = span.enter();
    let start = Instant::now();

    let options = classifier_options(args)?;
    let loaded = load_dictionary(&args.dictionary)?;
    let classifier = LedgerClassifier::with_dictionary(active_dictionary(loaded.as_ref()), options);

    let read_options = ReadOptions::default().with_delimiter(args.delimiter.into());
    let ledgers = read_trial_balance_with(&args.file, &read_options)
        .with_context(|| format!("read trial balance {}", args.file.display()))?;

    let output = classifier
        .process(&ledgers, &column_selection(args))
        .context("classify ledgers")?;
    for row in output.table.unmapped() {
        warn!(
            sequence = row.sequence,
            ledger = redact_value(&row.original_ledger_name),
            score = row.confidence_score,
            "ledger needs manual review"
        );
    }

    let items = build_pbc_items(&output.table);

    let outputs = match &args.output_dir {
        Some(dir) => {
            let report = MappingReport::new(
                options,
                &output.table,
                output.summary.clone(),
                items.clone(),
            )
            .with_source(args.file.display().to_string());
            let paths = write_outputs(dir, &output.table, &report)
                .with_context(|| format!("write outputs to {}", dir.display()))?;
            Some(paths)
        }
        None => None,
    };

    debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        items = items.len(),
        "classification finished"
    );

    Ok(ClassifyResult {
        source: args.file.clone(),
        columns: output.columns,
        table: output.table,
        summary: output.summary,
        items,
        outputs,
    })
}

pub fn run_categories(args: &CategoriesArgs) -> Result<()> {
    let loaded = load_dictionary(&args.dictionary)?;
    println!("{}", categories_table(active_dictionary(loaded.as_ref())));
    Ok(())
}

pub fn categories_table(dictionary: &CategoryDictionary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Category"),
        header_cell("Keywords"),
        header_cell("Variations"),
    ]);
    apply_table_style(&mut table);
    for (idx, category) in dictionary.categories().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            category.name.clone(),
            category.keywords.join(", "),
            category.variations.join(", "),
        ]);
    }
    table
}

pub fn run_explain(args: &ExplainArgs) -> Result<()> {
    let threshold = ConfidenceThreshold::new(args.threshold).context("invalid threshold")?;
    let loaded = load_dictionary(&args.dictionary)?;
    let classifier = LedgerClassifier::with_dictionary(
        active_dictionary(loaded.as_ref()),
        ClassifierOptions::new().with_threshold(threshold),
    );

    let resolution = classifier.resolve(&args.ledger_name);
    println!("Ledger: {}", args.ledger_name);
    println!(
        "Result: {} ({:.2}, {})",
        resolution.category.report_label(),
        resolution.confidence_score,
        resolution.confidence_level
    );
    let scores = classifier.explain(&args.ledger_name, args.top);
    println!("{}", explain_table(&scores));
    Ok(())
}

