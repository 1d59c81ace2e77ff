use std::{
    io::{BufRead, Write},
    ops::Range,
    sync::Arc,
};

use spanscore::{
    Span,
    SpanSelector,
    SpanSelectorOptions,
    spans::PassageLogProbs,
};

use crate::{
    input_output::{InputArgs, OutputArgs, read_json_lines, write_json_line},
    logging::LogArgs,
};

/// One passage's log-probabilities.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SpanRecord {
    /// Per-token span start log-probabilities.
    pub start_logp: Vec<f64>,

    /// Per-token span end log-probabilities.
    pub end_logp: Vec<f64>,

    /// Optional passage text, for answer extraction.
    #[serde(default)]
    pub passage: Option<String>,

    /// Optional per-token `[start, end)` byte offsets into `passage`.
    #[serde(default)]
    pub offsets: Option<Vec<(usize, usize)>>,
}

/// One selected span.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct SpanResult {
    /// First token; `-1` for no answer.
    pub start: i64,

    /// Last token, inclusive; `-1` for no answer.
    pub end: i64,

    /// The answer text, when the passage and offsets were given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Args for the spans command.
#[derive(clap::Args, Debug)]
pub struct SpansArgs {
    /// Treat each passage's last position as the no-answer channel.
    #[arg(long)]
    no_answer: bool,

    /// Select spans for passages in parallel.
    #[arg(long)]
    parallel: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl SpansArgs {
    /// Run the spans command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let options = SpanSelectorOptions::default()
            .with_no_answer(self.no_answer)
            .with_parallel(self.parallel);

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_spans(&mut reader, &mut writer, options)
    }
}

fn span_result(
    record: &SpanRecord,
    span: Span,
) -> Result<SpanResult, Box<dyn std::error::Error>> {
    let (start, end) = span.as_pair();

    let text = match (&record.passage, &record.offsets) {
        (Some(passage), Some(offsets)) => {
            let offsets: Vec<Range<usize>> = offsets.iter().map(|&(s, e)| s..e).collect();
            Some(span.extract(passage, &offsets)?.to_string())
        }
        _ => None,
    };

    Ok(SpanResult { start, end, text })
}

fn run_spans(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    options: SpanSelectorOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let records: Vec<SpanRecord> = read_json_lines(reader)?;
    log::info!(
        "selecting spans for {} passages (no_answer={}, parallel={})",
        records.len(),
        options.no_answer(),
        options.parallel()
    );

    let batch: Vec<PassageLogProbs<f64>> = records
        .iter()
        .map(|r| PassageLogProbs::new(&r.start_logp, &r.end_logp))
        .collect();

    let selector: Arc<dyn SpanSelector<f64>> = options.build();
    let spans = selector.select_batch(&batch)?;

    for (idx, (record, span)) in records.iter().zip(spans).enumerate() {
        log::debug!("passage {idx}: {span:?} ({} tokens)", span.token_count());
        write_json_line(writer, &span_result(record, span)?)?;
    }
    writer.flush()?;

    Ok(())
}
