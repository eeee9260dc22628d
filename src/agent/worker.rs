use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use super::synthesizer::{Synthesis, Synthesizer};

/// Commands understood by the background synthesis worker.
#[derive(Debug)]
pub(crate) enum SynthesisCommand {
	/// Run the synthesizer for `query` once `delay` has elapsed, replacing any
	/// task that is still waiting.
	Schedule {
		/// Submission the result will be correlated with.
		id: u64,
		query: String,
		delay: Duration,
	},
	/// Drop the waiting task if it belongs to this submission.
	Cancel { id: u64 },
	/// Stop the worker thread.
	Shutdown,
}

/// A finished synthesis tagged with its submission id.
#[derive(Debug)]
pub(crate) struct SynthesisDone {
	pub(crate) id: u64,
	pub(crate) query: String,
	pub(crate) synthesis: Synthesis,
}

struct PendingTask {
	id: u64,
	query: String,
	deadline: Instant,
}

/// Launch the worker thread and return its command and result channels.
pub(crate) fn spawn(
	synthesizer: Arc<dyn Synthesizer>,
) -> (Sender<SynthesisCommand>, Receiver<SynthesisDone>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();

	thread::spawn(move || worker_loop(synthesizer.as_ref(), command_rx, result_tx));

	(command_tx, result_rx)
}

fn worker_loop(
	synthesizer: &dyn Synthesizer,
	command_rx: Receiver<SynthesisCommand>,
	result_tx: Sender<SynthesisDone>,
) {
	let mut pending: Option<PendingTask> = None;

	loop {
		let deadline = pending.as_ref().map(|task| task.deadline);
		let command = match deadline {
			Some(deadline) => {
				let wait = deadline.saturating_duration_since(Instant::now());
				match command_rx.recv_timeout(wait) {
					Ok(command) => command,
					Err(RecvTimeoutError::Timeout) => {
						if let Some(task) = pending.take() {
							let synthesis = synthesizer.synthesize(&task.query);
							let done = SynthesisDone {
								id: task.id,
								query: task.query,
								synthesis,
							};
							if result_tx.send(done).is_err() {
								break;
							}
						}
						continue;
					}
					Err(RecvTimeoutError::Disconnected) => break,
				}
			}
			None => match command_rx.recv() {
				Ok(command) => command,
				Err(_) => break,
			},
		};

		match command {
			SynthesisCommand::Schedule { id, query, delay } => {
				pending = Some(PendingTask {
					id,
					query,
					deadline: Instant::now() + delay,
				});
			}
			SynthesisCommand::Cancel { id } => {
				if pending.as_ref().is_some_and(|task| task.id == id) {
					pending = None;
				}
			}
			SynthesisCommand::Shutdown => break,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::agent::MockSynthesizer;

	fn start() -> (Sender<SynthesisCommand>, Receiver<SynthesisDone>) {
		spawn(Arc::new(MockSynthesizer::new()))
	}

	#[test]
	fn scheduled_task_completes_after_delay() {
		let (tx, rx) = start();
		tx.send(SynthesisCommand::Schedule {
			id: 1,
			query: "Latest AI developments".into(),
			delay: Duration::from_millis(20),
		})
		.unwrap();

		let done = rx.recv_timeout(Duration::from_secs(2)).unwrap();
		assert_eq!(done.id, 1);
		assert_eq!(done.query, "Latest AI developments");
		assert_eq!(done.synthesis.results.len(), 5);
		tx.send(SynthesisCommand::Shutdown).unwrap();
	}

	#[test]
	fn rescheduling_replaces_the_waiting_task() {
		let (tx, rx) = start();
		tx.send(SynthesisCommand::Schedule {
			id: 1,
			query: "first question".into(),
			delay: Duration::from_millis(200),
		})
		.unwrap();
		tx.send(SynthesisCommand::Schedule {
			id: 2,
			query: "second question".into(),
			delay: Duration::from_millis(10),
		})
		.unwrap();

		let done = rx.recv_timeout(Duration::from_secs(2)).unwrap();
		assert_eq!(done.id, 2);
		assert!(rx.recv_timeout(Duration::from_millis(400)).is_err());
	}

	#[test]
	fn cancel_only_drops_matching_task() {
		let (tx, rx) = start();
		tx.send(SynthesisCommand::Schedule {
			id: 7,
			query: "some question".into(),
			delay: Duration::from_millis(50),
		})
		.unwrap();
		tx.send(SynthesisCommand::Cancel { id: 6 }).unwrap();
		assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap().id, 7);

		tx.send(SynthesisCommand::Schedule {
			id: 8,
			query: "another question".into(),
			delay: Duration::from_millis(50),
		})
		.unwrap();
		tx.send(SynthesisCommand::Cancel { id: 8 }).unwrap();
		assert!(rx.recv_timeout(Duration::from_millis(300)).is_err());
	}
}
