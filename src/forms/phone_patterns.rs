// src/forms/phone_patterns.rs
//! International phone-number templates, one per national numbering plan
//! variant. A submitted phone is valid iff it matches one template exactly.

use once_cell::sync::Lazy;
use regex::RegexSetBuilder;
use regex::RegexSet;

/// Pattern catalog. Literal `+` country code, optional parenthesized area
/// code, `-` group separators. Matched anchored at both ends, no
/// normalization of the input.
pub const PHONE_PATTERNS: &[&str] = &[
    r"\+247-\d\d\d\d",
    r"\+376-\d\d\d-\d\d\d",
    r"\+971-5\d-\d\d\d-\d\d\d\d",
    r"\+971-\d-\d\d\d-\d\d\d\d",
    r"\+93-\d\d-\d\d\d-\d\d\d\d",
    r"\+1\(268\)\d\d\d-\d\d\d\d",
    r"\+1\(264\)\d\d\d-\d\d\d\d",
    r"\+355\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+374-\d\d-\d\d\d-\d\d\d",
    r"\+599-\d\d\d-\d\d\d\d",
    r"\+599-\d\d\d-\d\d\d\d",
    r"\+599-9\d\d\d-\d\d\d\d",
    r"\+244\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+672-1\d\d-\d\d\d",
    r"\+54\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+1\(684\)\d\d\d-\d\d\d\d",
    r"\+43\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+61-\d-\d\d\d\d-\d\d\d\d",
    r"\+297-\d\d\d-\d\d\d\d",
    r"\+994-\d\d-\d\d\d-\d\d-\d\d",
    r"\+387-\d\d-\d\d\d\d\d",
    r"\+387-\d\d-\d\d\d\d",
    r"\+1\(246\)\d\d\d-\d\d\d\d",
    r"\+880-\d\d-\d\d\d-\d\d\d",
    r"\+32\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+226-\d\d-\d\d-\d\d\d\d",
    r"\+359\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+973-\d\d\d\d-\d\d\d\d",
    r"\+257-\d\d-\d\d-\d\d\d\d",
    r"\+229-\d\d-\d\d-\d\d\d\d",
    r"\+1\(441\)\d\d\d-\d\d\d\d",
    r"\+673-\d\d\d-\d\d\d\d",
    r"\+591-\d-\d\d\d-\d\d\d\d",
    r"\+55-\d\d-\d\d\d\d-\d\d\d\d",
    r"\+55-\d\d-\d\d\d\d\d-\d\d\d\d",
    r"\+1\(242\)\d\d\d-\d\d\d\d",
    r"\+975-17-\d\d\d-\d\d\d",
    r"\+975-\d-\d\d\d-\d\d\d",
    r"\+267-\d\d-\d\d\d-\d\d\d",
    r"\+375\(\d\d\)\d\d\d-\d\d-\d\d",
    r"\+501-\d\d\d-\d\d\d\d",
    r"\+243\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+236-\d\d-\d\d-\d\d\d\d",
    r"\+242-\d\d-\d\d\d-\d\d\d\d",
    r"\+41-\d\d-\d\d\d-\d\d\d\d",
    r"\+225-\d\d-\d\d\d-\d\d\d",
    r"\+682-\d\d-\d\d\d",
    r"\+56-\d-\d\d\d\d-\d\d\d\d",
    r"\+237-\d\d\d\d-\d\d\d\d",
    r"\+86\(\d\d\d\)\d\d\d\d-\d\d\d\d",
    r"\+86\(\d\d\d\)\d\d\d\d-\d\d\d",
    r"\+86-\d\d-\d\d\d\d\d-\d\d\d\d\d",
    r"\+57\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+506-\d\d\d\d-\d\d\d\d",
    r"\+53-\d-\d\d\d-\d\d\d\d",
    r"\+238\(\d\d\d\)\d\d-\d\d",
    r"\+599-\d\d\d-\d\d\d\d",
    r"\+357-\d\d-\d\d\d-\d\d\d",
    r"\+420\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+49\(\d\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+49\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+49\(\d\d\d\)\d\d-\d\d\d\d",
    r"\+49\(\d\d\d\)\d\d-\d\d\d",
    r"\+49\(\d\d\d\)\d\d-\d\d",
    r"\+49-\d\d\d-\d\d\d",
    r"\+253-\d\d-\d\d-\d\d-\d\d",
    r"\+45-\d\d-\d\d-\d\d-\d\d",
    r"\+1\(767\)\d\d\d-\d\d\d\d",
    r"\+1\(809\)\d\d\d-\d\d\d\d",
    r"\+1\(829\)\d\d\d-\d\d\d\d",
    r"\+1\(849\)\d\d\d-\d\d\d\d",
    r"\+213-\d\d-\d\d\d-\d\d\d\d",
    r"\+593-\d\d-\d\d\d-\d\d\d\d",
    r"\+593-\d-\d\d\d-\d\d\d\d",
    r"\+372-\d\d\d\d-\d\d\d\d",
    r"\+372-\d\d\d-\d\d\d\d",
    r"\+20\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+291-\d-\d\d\d-\d\d\d",
    r"\+34\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+251-\d\d-\d\d\d-\d\d\d\d",
    r"\+358\(\d\d\d\)\d\d\d-\d\d-\d\d",
    r"\+679-\d\d-\d\d\d\d\d",
    r"\+500-\d\d\d\d\d",
    r"\+691-\d\d\d-\d\d\d\d",
    r"\+298-\d\d\d-\d\d\d",
    r"\+262-\d\d\d\d\d-\d\d\d\d",
    r"\+33\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+508-\d\d-\d\d\d\d",
    r"\+590\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+241-\d-\d\d-\d\d-\d\d",
    r"\+1\(473\)\d\d\d-\d\d\d\d",
    r"\+995\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+594-\d\d\d\d\d-\d\d\d\d",
    r"\+233\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+350-\d\d\d-\d\d\d\d\d",
    r"\+299-\d\d-\d\d-\d\d",
    r"\+220\(\d\d\d\)\d\d-\d\d",
    r"\+224-\d\d-\d\d\d-\d\d\d",
    r"\+240-\d\d-\d\d\d-\d\d\d\d",
    r"\+30\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+502-\d-\d\d\d-\d\d\d\d",
    r"\+1\(671\)\d\d\d-\d\d\d\d",
    r"\+245-\d-\d\d\d\d\d\d",
    r"\+592-\d\d\d-\d\d\d\d",
    r"\+852-\d\d\d\d-\d\d\d\d",
    r"\+504-\d\d\d\d-\d\d\d\d",
    r"\+385-\(\d\d\)-\d\d\d-\d\d\d",
    r"\+385-\(\d\d\)-\d\d\d-\d\d\d\d",
    r"\+385-1-\d\d\d\d-\d\d\d",
    r"\+509-\d\d-\d\d-\d\d\d\d",
    r"\+36\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+62\(8\d\d\)\d\d\d-\d\d\d\d",
    r"\+62-\d\d-\d\d\d-\d\d",
    r"\+62-\d\d-\d\d\d-\d\d\d",
    r"\+62-\d\d-\d\d\d-\d\d\d\d",
    r"\+62\(8\d\d\)\d\d\d-\d\d\d",
    r"\+62\(8\d\d\)\d\d\d-\d\d-\d\d\d",
    r"\+353\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+972-5\d-\d\d\d-\d\d\d\d",
    r"\+972-\d-\d\d\d-\d\d\d\d",
    r"\+91\(\d\d\d\d\)\d\d\d-\d\d\d",
    r"\+246-\d\d\d-\d\d\d\d",
    r"\+964\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+98\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+354-\d\d\d-\d\d\d\d",
    r"\+39\(\d\d\d\)\d\d\d\d-\d\d\d",
    r"\+1\(876\)\d\d\d-\d\d\d\d",
    r"\+962-\d-\d\d\d\d-\d\d\d\d",
    r"\+81-\d\d-\d\d\d\d-\d\d\d\d",
    r"\+81\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+254-\d\d\d-\d\d\d\d\d\d",
    r"\+996\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+855-\d\d-\d\d\d-\d\d\d",
    r"\+686-\d\d-\d\d\d",
    r"\+269-\d\d-\d\d\d\d\d",
    r"\+1\(869\)\d\d\d-\d\d\d\d",
    r"\+850-191-\d\d\d-\d\d\d\d",
    r"\+850-\d\d-\d\d\d-\d\d\d",
    r"\+850-\d\d\d-\d\d\d\d-\d\d\d",
    r"\+850-\d\d\d-\d\d\d",
    r"\+850-\d\d\d\d-\d\d\d\d",
    r"\+850-\d\d\d\d-\d\d\d\d\d\d\d\d\d\d\d\d\d",
    r"\+82-\d\d-\d\d\d-\d\d\d\d",
    r"\+965-\d\d\d\d-\d\d\d\d",
    r"\+1\(345\)\d\d\d-\d\d\d\d",
    r"\+7\(6\d\d\)\d\d\d-\d\d-\d\d",
    r"\+7\(7\d\d\)\d\d\d-\d\d-\d\d",
    r"\+856\(20\d\d\)\d\d\d-\d\d\d",
    r"\+856-\d\d-\d\d\d-\d\d\d",
    r"\+961-\d\d-\d\d\d-\d\d\d",
    r"\+961-\d-\d\d\d-\d\d\d",
    r"\+1\(758\)\d\d\d-\d\d\d\d",
    r"\+423\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+94-\d\d-\d\d\d-\d\d\d\d",
    r"\+231-\d\d-\d\d\d-\d\d\d",
    r"\+266-\d-\d\d\d-\d\d\d\d",
    r"\+370\(\d\d\d\)\d\d-\d\d\d",
    r"\+352-\d\d\d-\d\d\d",
    r"\+352-\d\d\d\d-\d\d\d",
    r"\+352-\d\d\d\d\d-\d\d\d",
    r"\+352-\d\d\d\d\d\d-\d\d\d",
    r"\+371-\d\d-\d\d\d-\d\d\d",
    r"\+218-\d\d-\d\d\d-\d\d\d",
    r"\+218-21-\d\d\d-\d\d\d\d",
    r"\+212-\d\d-\d\d\d\d-\d\d\d",
    r"\+377\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+377-\d\d-\d\d\d-\d\d\d",
    r"\+373-\d\d\d\d-\d\d\d\d",
    r"\+382-\d\d-\d\d\d-\d\d\d",
    r"\+261-\d\d-\d\d-\d\d\d\d\d",
    r"\+692-\d\d\d-\d\d\d\d",
    r"\+389-\d\d-\d\d\d-\d\d\d",
    r"\+223-\d\d-\d\d-\d\d\d\d",
    r"\+95-\d\d-\d\d\d-\d\d\d",
    r"\+95-\d-\d\d\d-\d\d\d",
    r"\+95-\d\d\d-\d\d\d",
    r"\+976-\d\d-\d\d-\d\d\d\d",
    r"\+853-\d\d\d\d-\d\d\d\d",
    r"\+1\(670\)\d\d\d-\d\d\d\d",
    r"\+596\(\d\d\d\)\d\d-\d\d-\d\d",
    r"\+222-\d\d-\d\d-\d\d\d\d",
    r"\+1\(664\)\d\d\d-\d\d\d\d",
    r"\+356-\d\d\d\d-\d\d\d\d",
    r"\+230-\d\d\d-\d\d\d\d",
    r"\+960-\d\d\d-\d\d\d\d",
    r"\+265-1-\d\d\d-\d\d\d",
    r"\+265-\d-\d\d\d\d-\d\d\d\d",
    r"\+52\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+52-\d\d-\d\d-\d\d\d\d",
    r"\+60-\d\d-\d\d\d-\d\d\d\d",
    r"\+60-11-\d\d\d\d-\d\d\d\d",
    r"\+60\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+60-\d\d-\d\d\d-\d\d\d",
    r"\+60-\d-\d\d\d-\d\d\d",
    r"\+258-\d\d-\d\d\d-\d\d\d",
    r"\+264-\d\d-\d\d\d-\d\d\d\d",
    r"\+687-\d\d-\d\d\d\d",
    r"\+227-\d\d-\d\d-\d\d\d\d",
    r"\+672-3\d\d-\d\d\d",
    r"\+234\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+234-\d\d-\d\d\d-\d\d\d",
    r"\+234-\d\d-\d\d\d-\d\d",
    r"\+234\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+505-\d\d\d\d-\d\d\d\d",
    r"\+31-\d\d-\d\d\d-\d\d\d\d",
    r"\+47\(\d\d\d\)\d\d-\d\d\d",
    r"\+977-\d\d-\d\d\d-\d\d\d",
    r"\+674-\d\d\d-\d\d\d\d",
    r"\+683-\d\d\d\d",
    r"\+64\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+64-\d\d-\d\d\d-\d\d\d",
    r"\+64\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+968-\d\d-\d\d\d-\d\d\d",
    r"\+507-\d\d\d-\d\d\d\d",
    r"\+51\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+689-\d\d-\d\d-\d\d",
    r"\+675\(\d\d\d\)\d\d-\d\d\d",
    r"\+63\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+92\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+48\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+970-\d\d-\d\d\d-\d\d\d\d",
    r"\+351-\d\d-\d\d\d-\d\d\d\d",
    r"\+680-\d\d\d-\d\d\d\d",
    r"\+595\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+974-\d\d\d\d-\d\d\d\d",
    r"\+262-\d\d\d\d\d-\d\d\d\d",
    r"\+40-\d\d-\d\d\d-\d\d\d\d",
    r"\+381-\d\d-\d\d\d-\d\d\d\d",
    r"\+7\(\d\d\d\)\d\d\d-\d\d-\d\d",
    r"\+250\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+966-5-\d\d\d\d-\d\d\d\d",
    r"\+966-\d-\d\d\d-\d\d\d\d",
    r"\+677-\d\d\d-\d\d\d\d",
    r"\+677-\d\d\d\d\d",
    r"\+248-\d-\d\d\d-\d\d\d",
    r"\+249-\d\d-\d\d\d-\d\d\d\d",
    r"\+46-\d\d-\d\d\d-\d\d\d\d",
    r"\+65-\d\d\d\d-\d\d\d\d",
    r"\+290-\d\d\d\d",
    r"\+290-\d\d\d\d",
    r"\+386-\d\d-\d\d\d-\d\d\d",
    r"\+421\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+232-\d\d-\d\d\d\d\d\d",
    r"\+378-\d\d\d\d-\d\d\d\d\d\d",
    r"\+221-\d\d-\d\d\d-\d\d\d\d",
    r"\+252-\d\d-\d\d\d-\d\d\d",
    r"\+252-\d-\d\d\d-\d\d\d",
    r"\+252-\d-\d\d\d-\d\d\d",
    r"\+597-\d\d\d-\d\d\d\d",
    r"\+597-\d\d\d-\d\d\d",
    r"\+211-\d\d-\d\d\d-\d\d\d\d",
    r"\+239-\d\d-\d\d\d\d\d",
    r"\+503-\d\d-\d\d-\d\d\d\d",
    r"\+1\(721\)\d\d\d-\d\d\d\d",
    r"\+963-\d\d-\d\d\d\d-\d\d\d",
    r"\+268-\d\d-\d\d-\d\d\d\d",
    r"\+1\(649\)\d\d\d-\d\d\d\d",
    r"\+235-\d\d-\d\d-\d\d-\d\d",
    r"\+228-\d\d-\d\d\d-\d\d\d",
    r"\+66-\d\d-\d\d\d-\d\d\d\d",
    r"\+66-\d\d-\d\d\d-\d\d\d",
    r"\+992-\d\d-\d\d\d-\d\d\d\d",
    r"\+690-\d\d\d\d",
    r"\+670-\d\d\d-\d\d\d\d",
    r"\+670-77\d-\d\d\d\d\d",
    r"\+670-78\d-\d\d\d\d\d",
    r"\+993-\d-\d\d\d-\d\d\d\d",
    r"\+216-\d\d-\d\d\d-\d\d\d",
    r"\+676-\d\d\d\d\d",
    r"\+90\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+1\(868\)\d\d\d-\d\d\d\d",
    r"\+688-90\d\d\d\d",
    r"\+688-2\d\d\d\d",
    r"\+886-\d-\d\d\d\d-\d\d\d\d",
    r"\+886-\d\d\d\d-\d\d\d\d",
    r"\+255-\d\d-\d\d\d-\d\d\d\d",
    r"\+380\(\d\d\)\d\d\d-\d\d-\d\d",
    r"\+256\(\d\d\d\)\d\d\d-\d\d\d",
    r"\+44-\d\d-\d\d\d\d-\d\d\d\d",
    r"\+598-\d-\d\d\d-\d\d-\d\d",
    r"\+998-\d\d-\d\d\d-\d\d\d\d",
    r"\+39-6-698-\d\d\d\d\d",
    r"\+1\(784\)\d\d\d-\d\d\d\d",
    r"\+58\(\d\d\d\)\d\d\d-\d\d\d\d",
    r"\+1\(284\)\d\d\d-\d\d\d\d",
    r"\+1\(340\)\d\d\d-\d\d\d\d",
    r"\+84-\d\d-\d\d\d\d-\d\d\d",
    r"\+84\(\d\d\d\)\d\d\d\d-\d\d\d",
    r"\+678-\d\d-\d\d\d\d\d",
    r"\+678-\d\d\d\d\d",
    r"\+681-\d\d-\d\d\d\d",
    r"\+685-\d\d-\d\d\d\d",
    r"\+967-\d\d\d-\d\d\d-\d\d\d",
    r"\+967-\d-\d\d\d-\d\d\d",
    r"\+967-\d\d-\d\d\d-\d\d\d",
    r"\+27-\d\d-\d\d\d-\d\d\d\d",
    r"\+260-\d\d-\d\d\d-\d\d\d\d",
    r"\+263-\d-\d\d\d\d\d\d",
    r"\+1\(\d\d\d\)\d\d\d-\d\d\d\d",
];

/// The catalog compiled once, each template anchored as `^...$`.
pub static PHONE_PATTERN_SET: Lazy<RegexSet> = Lazy::new(|| {
    RegexSetBuilder::new(PHONE_PATTERNS.iter().map(|p| format!("^{p}$")))
        .size_limit(1 << 27)
        .build()
        .expect("phone pattern catalog must compile")
});
