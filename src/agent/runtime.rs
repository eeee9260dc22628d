use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

use log::warn;
use thiserror::Error;

use super::synthesizer::Synthesizer;
use super::worker::{self, SynthesisCommand, SynthesisDone};

/// The worker thread is gone, usually because the synthesizer panicked.
#[derive(Debug, Error)]
#[error("synthesis worker stopped")]
pub(crate) struct WorkerStopped;

/// Controller-side handle on the synthesis worker.
///
/// Tracks the one submission that is allowed to land; completions for any
/// other id are stale and get dropped by [`SynthesisRuntime::accepts`].
pub(crate) struct SynthesisRuntime {
	synthesizer: Arc<dyn Synthesizer>,
	tx: Sender<SynthesisCommand>,
	rx: Receiver<SynthesisDone>,
	next_id: u64,
	pending: Option<u64>,
}

impl SynthesisRuntime {
	pub(crate) fn spawn(synthesizer: Arc<dyn Synthesizer>) -> Self {
		let (tx, rx) = worker::spawn(Arc::clone(&synthesizer));
		Self {
			synthesizer,
			tx,
			rx,
			next_id: 0,
			pending: None,
		}
	}

	/// Replace a dead worker with a fresh one. Anything pending is lost.
	pub(crate) fn restart(&mut self) {
		let (tx, rx) = worker::spawn(Arc::clone(&self.synthesizer));
		self.tx = tx;
		self.rx = rx;
		self.pending = None;
	}

	/// Allocate an id for a new submission.
	pub(crate) fn next_submission(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		self.next_id
	}

	/// Hand `query` to the worker. A worker found dead is restarted once
	/// before giving up.
	pub(crate) fn schedule(
		&mut self,
		id: u64,
		query: String,
		delay: Duration,
	) -> Result<(), WorkerStopped> {
		let command = SynthesisCommand::Schedule { id, query, delay };
		let command = match self.tx.send(command) {
			Ok(()) => {
				self.pending = Some(id);
				return Ok(());
			}
			Err(err) => err.0,
		};

		warn!("synthesis worker stopped, restarting it");
		self.restart();
		self.tx.send(command).map_err(|_| WorkerStopped)?;
		self.pending = Some(id);
		Ok(())
	}

	/// Cancel whatever is waiting, returning its id.
	pub(crate) fn cancel_pending(&mut self) -> Option<u64> {
		let id = self.pending.take()?;
		if self.tx.send(SynthesisCommand::Cancel { id }).is_err() {
			warn!("synthesis worker stopped before #{id} could be cancelled");
		}
		Some(id)
	}

	pub(crate) fn accepts(&self, id: u64) -> bool {
		self.pending == Some(id)
	}

	pub(crate) fn complete(&mut self, id: u64) {
		if self.accepts(id) {
			self.pending = None;
		}
	}

	pub(crate) fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Next completion, or [`WorkerStopped`] once the worker has died and
	/// every completion it sent has been drained.
	pub(crate) fn try_recv(&self) -> Result<Option<SynthesisDone>, WorkerStopped> {
		match self.rx.try_recv() {
			Ok(done) => Ok(Some(done)),
			Err(TryRecvError::Empty) => Ok(None),
			Err(TryRecvError::Disconnected) => Err(WorkerStopped),
		}
	}

	pub(crate) fn recv_timeout(
		&self,
		timeout: Duration,
	) -> Result<Option<SynthesisDone>, WorkerStopped> {
		match self.rx.recv_timeout(timeout) {
			Ok(done) => Ok(Some(done)),
			Err(RecvTimeoutError::Timeout) => Ok(None),
			Err(RecvTimeoutError::Disconnected) => Err(WorkerStopped),
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(SynthesisCommand::Shutdown);
	}
}

impl Drop for SynthesisRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}
