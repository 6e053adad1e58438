//! Generation numbers that tie a fetch result to the screen that asked for it.

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Mints strictly increasing tickets.
#[derive(Debug, Default)]
pub struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> FetchTicket {
        self.last += 1;
        FetchTicket(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_unique_and_increasing() {
        let mut counter = TicketCounter::new();
        let a = counter.next();
        let b = counter.next();
        assert_ne!(a, b);
        assert!(b > a);
        assert_eq!(a.value(), 1);
        assert_eq!(b.to_string(), "#2");
    }
}
