//! Timetable generator: validation, slot building, and allocation strategy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

use crate::error::TimetableError;
use crate::models::{Timetable, TimetableConfig};
use crate::validation::validate_config;

use super::allocator::GreedyAllocator;
use super::ledger::DemandLedger;
use super::slots::build_daily_slots;

/// How the allocator is driven.
///
/// Both strategies return a timetable with the same shape and invariants;
/// they differ only in how much unplaced demand they tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AllocationStrategy {
    /// One greedy pass.
    #[default]
    Greedy,
    /// Up to `attempts` independent greedy passes drawing from the same
    /// random source. Keeps the first timetable with the fewest unplaced
    /// sessions and stops early once all demand is placed.
    BestOf {
        /// Maximum number of passes. Zero behaves like one.
        attempts: u32,
    },
}

/// Generates weekly timetables from a configuration.
///
/// # Example
///
/// ```
/// use u_timetable::models::{ClassGroup, ClockTime, TeachingAssignment, TimetableConfig};
/// use u_timetable::scheduler::{AllocationStrategy, TimetableGenerator};
///
/// let config = TimetableConfig::new(ClockTime::from_hm(8, 30).unwrap(), 45, 6)
///     .with_break(3, 20)
///     .with_class(ClassGroup::new("10th", "A"))
///     .with_assignment(TeachingAssignment::new("Iyer", "Math", "10th", "A").with_lectures(5))
///     .with_assignment(TeachingAssignment::new("Rao", "Physics", "10th", "A").with_labs(2));
///
/// let generator = TimetableGenerator::new().with_strategy(AllocationStrategy::BestOf { attempts: 4 });
/// let timetable = generator.generate_seeded(&config, 2024).unwrap();
///
/// assert_eq!(timetable.entry_count(), 6 * 7);
/// assert!(timetable.conflicts().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableGenerator {
    strategy: AllocationStrategy,
}

impl TimetableGenerator {
    /// Creates a generator using a single greedy pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allocation strategy.
    pub fn with_strategy(mut self, strategy: AllocationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The configured strategy.
    pub fn strategy(&self) -> AllocationStrategy {
        self.strategy
    }

    /// Generates a timetable, drawing tie-breaks from `rng`.
    ///
    /// # Errors
    /// [`TimetableError::InvalidConfig`] if the configuration fails
    /// [`validate_config`]. Unplaceable demand is not an error.
    #[instrument(
        skip_all,
        fields(
            classes = config.classes.len(),
            assignments = config.teachers.len(),
            strategy = ?self.strategy
        )
    )]
    pub fn generate<R: Rng + ?Sized>(
        &self,
        config: &TimetableConfig,
        rng: &mut R,
    ) -> Result<Timetable, TimetableError> {
        if let Err(errors) = validate_config(config) {
            warn!(problems = errors.len(), "rejected timetable configuration");
            return Err(TimetableError::InvalidConfig(errors));
        }

        let slots = build_daily_slots(config);
        let allocator = GreedyAllocator::new(&slots, &config.classes);

        let attempts = match self.strategy {
            AllocationStrategy::Greedy => 1,
            AllocationStrategy::BestOf { attempts } => attempts.max(1),
        };

        let mut ledger = DemandLedger::from_assignments(&config.teachers);
        let mut timetable = allocator.allocate(&mut ledger, rng);
        debug!(attempt = 1, unplaced = ledger.remaining_sessions(), "allocation pass finished");

        for attempt in 2..=attempts {
            if ledger.remaining_sessions() == 0 {
                break;
            }

            let mut candidate_ledger = DemandLedger::from_assignments(&config.teachers);
            let candidate = allocator.allocate(&mut candidate_ledger, rng);
            let unplaced = candidate_ledger.remaining_sessions();
            debug!(attempt, unplaced, "allocation pass finished");

            if unplaced < ledger.remaining_sessions() {
                timetable = candidate;
                ledger = candidate_ledger;
            }
        }

        info!(
            cells = timetable.entry_count(),
            sessions = timetable.session_count(),
            free_periods = timetable.free_period_count(),
            unplaced_lectures = ledger.remaining_lectures(),
            unplaced_labs = ledger.remaining_labs(),
            "generated timetable"
        );

        Ok(timetable)
    }

    /// Generates a reproducible timetable from a seed.
    pub fn generate_seeded(
        &self,
        config: &TimetableConfig,
        seed: u64,
    ) -> Result<Timetable, TimetableError> {
        self.generate(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Generates a timetable using the thread-local random generator.
    pub fn generate_random(&self, config: &TimetableConfig) -> Result<Timetable, TimetableError> {
        self.generate(config, &mut rand::rng())
    }
}
