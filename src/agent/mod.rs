//! The query controller and its injected collaborators.
//!
//! [`QueryController`] owns the four-way view state, the active query and its
//! results, and the bounded session history used as a cache. Validation and
//! synthesis are capabilities handed in through [`QueryControllerBuilder`];
//! synthesis runs on a worker thread after a configurable delay so the UI
//! loop never blocks.

mod runtime;
mod state;
mod synthesizer;
mod validator;
mod worker;


use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use chrono::Local;
use log::{debug, info, warn};

use runtime::{SynthesisRuntime, WorkerStopped};
use worker::SynthesisDone;

pub use state::{
	ControllerState, HISTORY_LIMIT, QueryHistory, QueryHistoryEntry, SearchResult, View,
};
pub use synthesizer::{MockSynthesizer, Synthesis, Synthesizer};
pub use validator::{HeuristicValidator, Validator};

/// Simulated latency before a novel query is answered.
pub const DEFAULT_SYNTHESIS_DELAY: Duration = Duration::from_millis(2000);

/// A view change, delivered to every subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
	pub from: View,
	pub to: View,
}

/// What a call to [`QueryController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The validator turned the query away.
	Rejected,
	/// The query was answered from history.
	Cached,
	/// Synthesis was scheduled under this submission id.
	Scheduled { id: u64 },
	/// The synthesis worker could not be reached; the view fell back to hero.
	Unavailable,
}

/// Configures the collaborators of a [`QueryController`].
pub struct QueryControllerBuilder {
	validator: Box<dyn Validator>,
	synthesizer: Arc<dyn Synthesizer>,
	delay: Duration,
}

impl Default for QueryControllerBuilder {
	fn default() -> Self {
		Self {
			validator: Box::new(HeuristicValidator::new()),
			synthesizer: Arc::new(MockSynthesizer::new()),
			delay: DEFAULT_SYNTHESIS_DELAY,
		}
	}
}

impl QueryControllerBuilder {
	#[must_use]
	pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
		self.validator = Box::new(validator);
		self
	}

	#[must_use]
	pub fn synthesizer(mut self, synthesizer: impl Synthesizer + 'static) -> Self {
		self.synthesizer = Arc::new(synthesizer);
		self
	}

	#[must_use]
	pub fn delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	/// Start the synthesis worker and return a controller in the hero view.
	pub fn build(self) -> QueryController {
		QueryController {
			state: ControllerState::default(),
			validator: self.validator,
			synthesis: SynthesisRuntime::spawn(self.synthesizer),
			delay: self.delay,
			subscribers: Vec::new(),
		}
	}
}

pub struct QueryController {
	state: ControllerState,
	validator: Box<dyn Validator>,
	synthesis: SynthesisRuntime,
	delay: Duration,
	subscribers: Vec<Sender<Transition>>,
}

impl Default for QueryController {
	fn default() -> Self {
		Self::new()
	}
}

impl QueryController {
	pub fn new() -> Self {
		Self::builder().build()
	}

	pub fn builder() -> QueryControllerBuilder {
		QueryControllerBuilder::default()
	}

	pub fn state(&self) -> &ControllerState {
		&self.state
	}

	pub fn view(&self) -> View {
		self.state.view
	}

	pub fn history(&self) -> &QueryHistory {
		&self.state.history
	}

	/// Whether a synthesis is waiting to land.
	pub fn has_pending(&self) -> bool {
		self.synthesis.is_pending()
	}

	/// Receive a [`Transition`] for every view change from now on.
	pub fn subscribe(&mut self) -> Receiver<Transition> {
		let (tx, rx) = mpsc::channel();
		self.subscribers.push(tx);
		rx
	}

	/// Submit an already trimmed, non-empty query.
	///
	/// Any synthesis still waiting from an earlier submission is cancelled
	/// first, whatever this submission turns out to be.
	pub fn submit(&mut self, query: &str) -> SubmitOutcome {
		if let Some(id) = self.synthesis.cancel_pending() {
			debug!("synthesis #{id} superseded by a new submission");
		}

		self.state.current_query = query.to_string();

		if !self.validator.is_valid(query) {
			info!("rejected query {query:?}");
			self.set_view(View::Invalid);
			return SubmitOutcome::Rejected;
		}

		if let Some(entry) = self.state.history.find(query) {
			let results = entry.results.clone();
			let summary = entry.summary.clone();
			info!("answered {query:?} from history");
			self.state.current_results = results;
			self.state.current_summary = summary;
			self.set_view(View::Results);
			return SubmitOutcome::Cached;
		}

		let id = self.synthesis.next_submission();
		info!(
			"scheduling synthesis #{id} for {query:?} in {}ms",
			self.delay.as_millis()
		);
		if let Err(err) = self.synthesis.schedule(id, query.to_string(), self.delay) {
			warn!("could not schedule synthesis #{id}: {err}");
			self.fall_back_to_hero();
			return SubmitOutcome::Unavailable;
		}
		self.set_view(View::Loading);
		SubmitOutcome::Scheduled { id }
	}

	/// Return to the hero view, cancelling any waiting synthesis.
	pub fn go_back(&mut self) {
		if let Some(id) = self.synthesis.cancel_pending() {
			info!("cancelled synthesis #{id}");
		}
		self.state.current_query.clear();
		self.set_view(View::Hero);
	}

	/// Apply completed syntheses. Returns `true` when state changed.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;
		loop {
			match self.synthesis.try_recv() {
				Ok(Some(done)) => changed |= self.apply(done),
				Ok(None) => break,
				Err(err) => {
					changed |= self.recover(err);
					break;
				}
			}
		}
		changed
	}

	/// Block until the waiting synthesis lands or `timeout` passes.
	///
	/// Returns `true` if nothing is left pending.
	pub fn wait(&mut self, timeout: Duration) -> bool {
		let deadline = Instant::now() + timeout;
		while self.synthesis.is_pending() {
			let remaining = deadline.saturating_duration_since(Instant::now());
			if remaining.is_zero() {
				break;
			}
			match self.synthesis.recv_timeout(remaining) {
				Ok(Some(done)) => {
					self.apply(done);
				}
				Ok(None) => {}
				Err(err) => {
					self.recover(err);
				}
			}
		}
		!self.synthesis.is_pending()
	}

	/// Restart a dead worker. A synthesis that was waiting on it is lost, so
	/// the view falls back to hero. Returns `true` when state changed.
	fn recover(&mut self, err: WorkerStopped) -> bool {
		let lost = self.synthesis.is_pending();
		warn!("{err}, restarting it");
		self.synthesis.restart();
		if lost && self.state.view == View::Loading {
			self.fall_back_to_hero();
			return true;
		}
		false
	}

	fn fall_back_to_hero(&mut self) {
		self.state.current_query.clear();
		self.set_view(View::Hero);
	}

	fn apply(&mut self, done: SynthesisDone) -> bool {
		let SynthesisDone {
			id,
			query,
			synthesis,
		} = done;

		if !self.synthesis.accepts(id) {
			debug!("discarding stale synthesis #{id} for {query:?}");
			return false;
		}
		self.synthesis.complete(id);

		let Synthesis { results, summary } = synthesis;
		self.state.current_results = results.clone();
		self.state.current_summary = summary.clone();
		self.state.history.record(QueryHistoryEntry {
			query,
			results,
			summary,
			timestamp: Local::now(),
		});
		info!(
			"synthesis #{id} complete, {} queries in history",
			self.state.history.len()
		);
		self.set_view(View::Results);
		true
	}

	fn set_view(&mut self, view: View) {
		let transition = Transition {
			from: self.state.view,
			to: view,
		};
		self.state.view = view;
		self.subscribers
			.retain(|subscriber| subscriber.send(transition).is_ok());
	}
}
