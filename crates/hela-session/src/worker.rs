use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Work / Result types
// ---------------------------------------------------------------------------

struct ConvertWork {
    input: String,
    generation: u64,
}

/// A finished conversion, tagged with the generation it was requested under.
pub struct WorkerResult {
    pub generation: u64,
    pub output: String,
}

// ---------------------------------------------------------------------------
// ConvertWorker
// ---------------------------------------------------------------------------

/// Background conversion thread.
///
/// Requests are tagged with the session generation. The worker drains its
/// queue to the newest request before converting and checks the shared
/// generation before and after the conversion, so results for superseded
/// input are never sent.
pub struct ConvertWorker {
    work_tx: mpsc::Sender<ConvertWork>,
    result_rx: Mutex<mpsc::Receiver<WorkerResult>>,
    generation: Arc<AtomicU64>,
}

impl ConvertWorker {
    pub fn spawn() -> Self {
        let generation = Arc::new(AtomicU64::new(0));
        let (work_tx, work_rx) = mpsc::channel::<ConvertWork>();
        let (result_tx, result_rx) = mpsc::channel::<WorkerResult>();
        {
            let generation = Arc::clone(&generation);
            thread::Builder::new()
                .name("hela-convert".into())
                .spawn(move || convert_worker(work_rx, result_tx, generation))
                .expect("failed to spawn convert worker");
        }
        Self {
            work_tx,
            result_rx: Mutex::new(result_rx),
            generation,
        }
    }

    /// Queue `input` for conversion under `generation` (the value returned
    /// by `ConvertSession::update`). Marks every older queued request stale.
    pub fn submit(&self, input: String, generation: u64) {
        self.generation.store(generation, Ordering::SeqCst);
        let _ = self.work_tx.send(ConvertWork { input, generation });
    }

    /// Mark all queued and in-flight work stale without queuing new work.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn try_recv(&self) -> Option<WorkerResult> {
        let rx = self.result_rx.lock().ok()?;
        rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<WorkerResult> {
        let rx = self.result_rx.lock().ok()?;
        rx.recv_timeout(timeout).ok()
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn convert_worker(
    rx: mpsc::Receiver<ConvertWork>,
    tx: mpsc::Sender<WorkerResult>,
    generation: Arc<AtomicU64>,
) {
    while let Ok(work) = rx.recv() {
        // Drain: if multiple work items queued, skip to latest
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        // Check staleness before doing work
        if latest.generation != generation.load(Ordering::SeqCst) {
            continue;
        }

        let output = hela_core::converter::convert(&latest.input);

        // Check staleness after conversion
        if latest.generation != generation.load(Ordering::SeqCst) {
            continue;
        }

        let _ = tx.send(WorkerResult {
            generation: latest.generation,
            output,
        });
    }
}
