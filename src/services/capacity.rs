use crate::models::SessionAvailability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionDenied {
    SlotFull,
    DepartmentQuotaFull,
}

impl std::fmt::Display for AdmissionDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdmissionDenied::SlotFull => write!(f, "session is full"),
            AdmissionDenied::DepartmentQuotaFull => {
                write!(f, "department quota for this session is full")
            }
        }
    }
}

/// Pure admission rules for one slot. All counting happens elsewhere; this
/// only compares occupancy against the configured limits.
#[derive(Debug, Clone, Copy)]
pub struct CapacityPolicy {
    capacity: i64,
    quota: i64,
}

impl CapacityPolicy {
    pub fn new(capacity: i64, quota: i64) -> Self {
        Self { capacity, quota }
    }

    /// A booking is admissible iff the slot has a free seat and the
    /// department still has quota within it. The slot check wins when both
    /// limits are hit.
    pub fn admit(&self, slot_count: i64, dept_count: i64) -> Result<(), AdmissionDenied> {
        if slot_count >= self.capacity {
            return Err(AdmissionDenied::SlotFull);
        }
        if dept_count >= self.quota {
            return Err(AdmissionDenied::DepartmentQuotaFull);
        }
        Ok(())
    }

    pub fn availability(&self, slot_count: i64, dept_count: i64) -> SessionAvailability {
        SessionAvailability {
            available: self.admit(slot_count, dept_count).is_ok(),
            remaining: (self.capacity - slot_count).max(0),
            dept_remaining: (self.quota - dept_count).max(0),
        }
    }
}
