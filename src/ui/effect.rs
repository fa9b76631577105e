use std::time::Duration;

/// Side effects that should be executed outside the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin periodic clock refreshes
    StartTicker,
    /// Stop clock refreshes
    StopTicker,
    /// Send `FlashExpired(generation)` after `after`
    ScheduleFlashExpiry { generation: u64, after: Duration },
}
