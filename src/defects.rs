use tracing::warn;

/// A tracked defect in the remote service. Cases covering one of these
/// assert the correct behavior and are expected to fail until the service
/// is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownDefect {
    pub id: &'static str,
    pub summary: &'static str,
}

pub const TIMEZONE_DOUBLED: KnownDefect = KnownDefect {
    id: "BUG-01",
    summary: "createdAt carries a duplicated timezone offset",
};

pub const ERROR_RESULT_SHAPE: KnownDefect = KnownDefect {
    id: "BUG-02",
    summary: "v2 error body returns `result` as an object instead of a string",
};

pub const STAT_SPOOFING: KnownDefect = KnownDefect {
    id: "BUG-03",
    summary: "create accepts arbitrary client-supplied engagement counters",
};

pub const RESPONSE_CONTRACT: KnownDefect = KnownDefect {
    id: "BUG-04",
    summary: "create returns a status wrapper instead of the item object",
};

pub const TRACE_ALLOW_HEADER: KnownDefect = KnownDefect {
    id: "BUG-05",
    summary: "405 response to TRACE is missing the Allow header",
};

pub const BLANK_NAME_ACCEPTED: KnownDefect = KnownDefect {
    id: "BUG-06",
    summary: "whitespace-only item names are accepted",
};

/// Expected-failure policy. `check` is the contract assertion, `Err` carrying
/// the observed violation. While the defect reproduces the case passes (with
/// a warning); once the contract holds the case fails loudly so the marker
/// gets retired instead of masking a fixed service.
pub fn expect_defect(defect: KnownDefect, check: std::result::Result<(), String>) {
    match check {
        Err(reason) => {
            warn!(defect = defect.id, %reason, "Known defect still reproduces");
        }
        Ok(()) => panic!(
            "{} no longer reproduces ({}); the contract now holds, retire this known-defect marker",
            defect.id, defect.summary
        ),
    }
}
