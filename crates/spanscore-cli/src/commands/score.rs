use std::io::{BufRead, Write};

use spanscore::{AnswerMetric, MetricSnapshot, ScoreAccumulator};

use crate::{
    input_output::{InputArgs, OutputArgs, read_json_lines},
    logging::LogArgs,
};

/// One scored example.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ScoreRecord {
    /// The predicted answer; `""` predicts "no answer".
    pub prediction: String,

    /// Gold answers; empty, or a leading `""`, marks a no-answer question.
    #[serde(default)]
    pub answers: Vec<String>,
}

/// Args for the score command.
#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[clap(flatten)]
    logging: LogArgs,
}

impl ScoreArgs {
    /// Run the score command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_score(&mut reader, &mut writer)?;
        Ok(())
    }
}

fn run_score(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<MetricSnapshot, Box<dyn std::error::Error>> {
    let records: Vec<ScoreRecord> = read_json_lines(reader)?;
    log::info!("scoring {} examples", records.len());

    let mut acc = ScoreAccumulator::new();
    for record in &records {
        let score = acc.record(&record.prediction, &record.answers);
        log::debug!("{:?} -> em={} f1={:.4}", record.prediction, score.em, score.f1);
    }

    let snapshot = acc.snapshot(true);
    if snapshot.total == 0 {
        log::warn!("no examples to score");
    }

    serde_json::to_writer_pretty(&mut *writer, &snapshot.to_map())?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(snapshot)
}
