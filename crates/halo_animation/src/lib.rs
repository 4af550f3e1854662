//! Halo Animation System
//!
//! Looping animations and one-shot timers, advanced by the host.
//!
//! # Features
//!
//! - **Loops**: values swept from `from` to `to` over a period, forever
//! - **Timers**: callbacks fired after a delay of ticked time
//! - **Weak Handles**: components register work without owning the scheduler
//! - **RAII Registrations**: [`AnimatedLoop`] unregisters itself on drop

pub mod scheduler;

pub use scheduler::{
    AnimatedLoop, AnimationScheduler, LoopAnimation, LoopId, SchedulerHandle, TimerCallback,
    TimerId,
};
