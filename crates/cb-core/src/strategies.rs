//! Proptest strategies for well-formed widget input.

use crate::contact::Contact;
use crate::validate::MIN_EMAIL_LEN;
use proptest::prelude::*;

prop_compose! {
    /// Name or city: letters with inner spaces, no leading or trailing blank.
    pub(crate) fn valid_label()(label in "[A-Za-z][A-Za-z ]{0,10}[A-Za-z]") -> String {
        label
    }
}

prop_compose! {
    /// `local@domain.tld`, padded in the local part up to the minimum length.
    pub(crate) fn valid_email()(
        head in "[-_A-Za-z0-9]{1,6}",
        local_tail in prop::collection::vec(("[._-]", "[A-Za-z0-9]{1,5}"), 0..3),
        domain in "[A-Za-z0-9]{1,6}",
        domain_tail in prop::collection::vec(("[.-]", "[A-Za-z0-9]{1,5}"), 0..3),
        tld in "[A-Za-z]{2,4}",
    ) -> String {
        let mut local = join_segments(head, &local_tail);
        let host = join_segments(domain, &domain_tail);
        let len = local.len() + 1 + host.len() + 1 + tld.len();
        if len < MIN_EMAIL_LEN {
            local.push_str(&"x".repeat(MIN_EMAIL_LEN - len));
        }
        format!("{local}@{host}.{tld}")
    }
}

prop_compose! {
    pub(crate) fn valid_contact()(
        name in valid_label(),
        city in valid_label(),
        email in valid_email(),
    ) -> Contact {
        Contact::new(name, city, email)
    }
}

fn join_segments(head: String, tail: &[(String, String)]) -> String {
    tail.iter()
        .fold(head, |acc, (sep, segment)| format!("{acc}{sep}{segment}"))
}
