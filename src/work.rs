//! Unit-of-work primitives shared by the scheduling patterns.
//!
//! A pattern drives N trivial units of work to completion and signals the
//! end of its timed interval through a [`Deferred`]. The types here carry
//! that bookkeeping: the completion handle itself, the counter that decides
//! when the final unit has signaled, and the linked chain the traversal
//! patterns walk.

use futures::channel::oneshot;

/// Signal that fires once the paired [`Deferred`] resolves.
///
/// The engine awaits this to end a timed interval; tests poll it with
/// `try_recv` to observe whether (and how many times) a case completed.
pub type CompletionSignal = oneshot::Receiver<()>;

/// A unit of work that signals through a plain callback.
pub type CallbackUnit = fn(&mut dyn FnMut());

/// A unit of work that signals through a [`Resolver`] method call.
pub type ResolverUnit = fn(&mut Resolver);

/// Completion handle for one timed case invocation.
///
/// A case must resolve its handle exactly once, after all N units of work
/// have been accounted for. `resolve` consumes the handle, so firing twice
/// is unrepresentable; dropping the handle unresolved surfaces as
/// [`BenchError::CaseAbandoned`](crate::BenchError::CaseAbandoned) in the
/// engine.
pub struct Deferred {
    tx: oneshot::Sender<()>,
}

impl Deferred {
    /// Create a handle and the signal that fires when it resolves.
    pub fn new() -> (Self, CompletionSignal) {
        let (tx, rx) = oneshot::channel();
        (Self { tx }, rx)
    }

    /// Mark the end of the timed interval.
    pub fn resolve(self) {
        // Send failure means the signal side was dropped; nothing to do.
        let _ = self.tx.send(());
    }
}

/// Tracks how many units of a fan-out have signaled completion.
///
/// Owned state standing in for the mutable integer the patterns close over:
/// a target count and a running count, with a single record operation.
#[derive(Debug, Clone)]
pub struct JoinCounter {
    target: usize,
    completed: usize,
}

impl JoinCounter {
    pub fn new(target: usize) -> Self {
        Self {
            target,
            completed: 0,
        }
    }

    /// Record one completion.
    ///
    /// Returns `true` exactly when the final (target-th) unit signals, and
    /// `false` on every other call, so the caller fires its completion
    /// handle at most once even if over-called.
    pub fn record(&mut self) -> bool {
        self.completed += 1;
        self.completed == self.target
    }

    /// Whether the target has been reached. A target of zero is vacuously
    /// satisfied.
    pub fn is_satisfied(&self) -> bool {
        self.completed >= self.target
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn target(&self) -> usize {
        self.target
    }
}

/// Resolver object handed to chain listeners in the method-call variant.
///
/// Functionally equivalent to the bare callback resolver; exists so the
/// chain-walk pattern can be measured with a method call in place of a
/// closure invocation.
pub struct Resolver {
    counter: JoinCounter,
    deferred: Option<Deferred>,
}

impl Resolver {
    pub fn new(target: usize, deferred: Deferred) -> Self {
        Self {
            counter: JoinCounter::new(target),
            deferred: Some(deferred),
        }
    }

    /// Record one unit completion, firing the underlying handle when the
    /// final unit signals.
    pub fn resolve(&mut self) {
        if self.counter.record() {
            if let Some(deferred) = self.deferred.take() {
                deferred.resolve();
            }
        }
    }
}

/// One node in a listener chain: the listener plus the link to its
/// successor.
pub struct ChainNode<F> {
    listener: F,
    next: Option<Box<ChainNode<F>>>,
}

impl<F> ChainNode<F> {
    pub fn next(&self) -> Option<&ChainNode<F>> {
        self.next.as_deref()
    }
}

impl<F: Copy> ChainNode<F> {
    pub fn listener(&self) -> F {
        self.listener
    }
}

/// Singly linked chain of listeners with a tail sentinel.
///
/// A chain built with `count` has `count` traversable nodes plus one
/// trailing sentinel; traversal visits a node only while a successor
/// exists, so the sentinel's listener is never invoked and a chain built
/// with `count = 0` is never traversed at all.
pub struct Chain<F> {
    head: ChainNode<F>,
}

impl<F: Copy> Chain<F> {
    /// Build a chain of `count` traversable nodes replicating `listener`.
    pub fn build(count: usize, listener: F) -> Self {
        let mut next = None;
        for _ in 0..count {
            next = Some(Box::new(ChainNode { listener, next }));
        }
        Self {
            head: ChainNode { listener, next },
        }
    }
}

impl<F> Chain<F> {
    pub fn head(&self) -> &ChainNode<F> {
        &self.head
    }

    /// Number of traversable nodes (the tail sentinel is excluded).
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut node = &self.head;
        while let Some(next) = node.next.as_deref() {
            count += 1;
            node = next;
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.head.next.is_none()
    }
}

impl<F> Drop for Chain<F> {
    fn drop(&mut self) {
        // Unlink iteratively; the default recursive drop would recurse once
        // per node and long chains overflow the stack.
        let mut next = self.head.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

#[cfg(test)]
mod tests;
