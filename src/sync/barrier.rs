use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// A reusable rendezvous for a fixed number of participants.
///
/// Sense-reversing: the last participant to arrive resets the count and
/// flips `sense`, releasing everyone spinning on the old value. The
/// barrier can be waited on again straight away.
#[derive(Debug)]
pub struct SpinBarrier {
    participants: usize,
    arrived: AtomicUsize,
    sense: AtomicBool,
    generation: AtomicUsize,
}
impl SpinBarrier {
    /// `participants` must be at least 1.
    pub const fn new(participants: usize) -> SpinBarrier {
        SpinBarrier {
            participants,
            arrived: AtomicUsize::new(0),
            sense: AtomicBool::new(false),
            generation: AtomicUsize::new(0),
        }
    }
    pub fn participants(&self) -> usize {
        self.participants
    }
    /// How many times every participant has passed the barrier.
    pub fn generation(&self) -> usize {
        self.generation.load(Ordering::Acquire)
    }

    /// Blocks until all participants have called `wait`.
    ///
    /// Returns `true` for exactly one participant per generation.
    pub fn wait(&self) -> bool {
        let sense = self.sense.load(Ordering::Acquire);

        if self.arrived.fetch_add(1, Ordering::AcqRel) + 1 == self.participants {
            // Last one in.
            self.arrived.store(0, Ordering::Relaxed);
            let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
            log::trace!("barrier of {} released, generation {}", self.participants, generation);
            self.sense.store(!sense, Ordering::Release);
            true
        } else {
            while self.sense.load(Ordering::Acquire) == sense {
                core::hint::spin_loop();
            }
            false
        }
    }
}
