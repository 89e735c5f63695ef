use std::fmt;
use std::sync::Arc;

/// Selection data for one SRV target host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrvTarget {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
}

impl SrvTarget {
    pub fn new(priority: u16, weight: u16, port: u16) -> Self {
        Self {
            priority,
            weight,
            port,
        }
    }
}

/// Target hostname → selection data, in insertion order.
///
/// A hostname appears at most once; inserting it again overwrites the
/// stored values without moving the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrvTargets {
    entries: Vec<(Arc<str>, SrvTarget)>,
}

impl SrvTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, host: impl Into<Arc<str>>, target: SrvTarget) {
        let host = host.into();
        match self.entries.iter_mut().find(|(h, _)| *h == host) {
            Some((_, existing)) => *existing = target,
            None => self.entries.push((host, target)),
        }
    }

    pub fn get(&self, host: &str) -> Option<&SrvTarget> {
        self.entries
            .iter()
            .find(|(h, _)| h.as_ref() == host)
            .map(|(_, t)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SrvTarget)> {
        self.entries.iter().map(|(h, t)| (h.as_ref(), t))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<H: Into<Arc<str>>> FromIterator<(H, SrvTarget)> for SrvTargets {
    fn from_iter<I: IntoIterator<Item = (H, SrvTarget)>>(iter: I) -> Self {
        let mut targets = SrvTargets::new();
        for (host, target) in iter {
            targets.insert(host, target);
        }
        targets
    }
}

/// `<priority> <weight> <port> <target>` per host, comma-joined without spaces.
impl fmt::Display for SrvTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (host, t)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{} {} {} {}", t.priority, t.weight, t.port, host)?;
        }
        Ok(())
    }
}
