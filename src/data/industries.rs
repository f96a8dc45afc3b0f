//! Industry taxonomy used for categorisation.

use super::Industry;

/// Name of the catch-all industry used when nothing else applies.
pub const OTHER: &str = "Other";

/// All industries a domain can be categorised into.
pub const INDUSTRIES: &[Industry] = &[
    industry("ad", "Adult Content"),
    industry("ag", "Agriculture"),
    industry("ar", "Arts"),
    industry("np", "Non-Profit"),
    industry("ps", "Professional Services"),
    industry("cs", "Construction"),
    industry("cn", "Critical National Infrastructure"),
    industry("ec", "Shopping and E-Commerce"),
    industry("el", "E-Learning"),
    industry("ed", "Education"),
    industry("eg", "Energy"),
    industry("en", "Entertainment"),
    industry("nm", "News and Media"),
    industry("sn", "Social Network"),
    industry("sr", "Streaming"),
    industry("fs", "Financial Services"),
    industry("fo", "Food"),
    industry("gv", "Government"),
    industry("hc", "Healthcare"),
    industry("hs", "Hospitality"),
    industry("it", "Information Technology and Internet"),
    industry("lg", "Legal"),
    industry("mf", "Manufacturing"),
    industry("ot", OTHER),
    industry("tr", "Transportation"),
    industry("tc", "Telecommunications"),
];

const fn industry(id: &'static str, name: &'static str) -> Industry {
    Industry { id, name }
}
