//! `trains exam` - the ten standard questions

use crate::cli::{Cli, OutputFormat};
use trains_core::error::Result;
use trains_core::format::record_header;
use trains_core::network::exam::{run_exam, ExamAnswer, NO_SUCH_ROUTE};
use trains_core::network::Network;

fn record_answer_line(answer: &ExamAnswer) -> String {
    match answer.value {
        Some(value) => format!("A {} {}", answer.number, value),
        None => format!("A {} \"{}\"", answer.number, NO_SUCH_ROUTE),
    }
}

/// Execute the exam command
pub fn execute(cli: &Cli, network: &Network) -> Result<()> {
    let answers = run_exam(network)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&answers)?),
        OutputFormat::Human => {
            for answer in &answers {
                println!("{}", answer);
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                record_header("exam", &[("count", answers.len().to_string())])
            );
            for answer in &answers {
                println!("{}", record_answer_line(answer));
            }
        }
    }

    Ok(())
}
