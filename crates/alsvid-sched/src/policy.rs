//! Polaris queue policy.
//!
//! Per-queue node-count and walltime ranges, plus the per-node CPU and
//! memory ceilings that apply regardless of queue. Numbers follow the
//! ALCF Polaris queue documentation.

use std::fmt;
use std::str::FromStr;

use crate::error::SchedError;

/// Physical cores per Polaris node.
pub const CPU_LIMIT: u32 = 32;

/// Memory request ceiling per node in GB. Nodes carry 512 GiB of DDR4;
/// requests are capped below that.
pub const MEMORY_LIMIT_GB: u32 = 256;

/// Scheduling queues available on Polaris.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Queue {
    /// Small interactive test runs, at most two nodes.
    Debug,
    /// Scaling tests past the debug node limit.
    DebugScaling,
    /// Production runs.
    Prod,
    /// Low-priority runs with long walltime but no completion guarantee.
    Preemptable,
    /// On-demand runs.
    Demand,
}

impl Queue {
    /// All known queues, in documentation order.
    pub const ALL: [Queue; 5] = [
        Queue::Debug,
        Queue::DebugScaling,
        Queue::Prod,
        Queue::Preemptable,
        Queue::Demand,
    ];

    /// Queue name as the scheduler spells it.
    pub const fn name(self) -> &'static str {
        match self {
            Queue::Debug => "debug",
            Queue::DebugScaling => "debug-scaling",
            Queue::Prod => "prod",
            Queue::Preemptable => "preemptable",
            Queue::Demand => "demand",
        }
    }

    /// Node-count and walltime limits for this queue.
    pub const fn policy(self) -> QueuePolicy {
        match self {
            Queue::Debug => QueuePolicy {
                min_nodes: 1,
                max_nodes: 2,
                min_walltime: 5,
                max_walltime: 60,
            },
            Queue::DebugScaling => QueuePolicy {
                min_nodes: 1,
                max_nodes: 10,
                min_walltime: 5,
                max_walltime: 60,
            },
            Queue::Prod => QueuePolicy {
                min_nodes: 10,
                max_nodes: 496,
                min_walltime: 5,
                max_walltime: 24 * 60,
            },
            Queue::Preemptable => QueuePolicy {
                min_nodes: 1,
                max_nodes: 10,
                min_walltime: 5,
                max_walltime: 72 * 60,
            },
            Queue::Demand => QueuePolicy {
                min_nodes: 1,
                max_nodes: 56,
                min_walltime: 5,
                max_walltime: 60,
            },
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Queue {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Queue::Debug),
            "debug-scaling" => Ok(Queue::DebugScaling),
            "prod" => Ok(Queue::Prod),
            "preemptable" => Ok(Queue::Preemptable),
            "demand" => Ok(Queue::Demand),
            other => Err(SchedError::UnknownQueue(other.to_string())),
        }
    }
}

/// Inclusive node-count and walltime limits for one queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuePolicy {
    /// Minimum node count.
    pub min_nodes: u32,
    /// Maximum node count.
    pub max_nodes: u32,
    /// Minimum walltime in minutes.
    pub min_walltime: u32,
    /// Maximum walltime in minutes.
    pub max_walltime: u32,
}
