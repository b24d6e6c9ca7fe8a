pub const COMPANY: &str = "Prime Group";
pub const FOUNDED: u16 = 2016;
pub const TAGLINE: &str = "Your trusted staffing partner since 2016";
pub const INTRO: &str = "High level experience in staffing solutions and employment services, providing quality workforce to meet your business needs.";
pub const ABOUT: &str = "Since 2016, Prime Group has been dedicated to providing quality staffing solutions tailored to our clients' needs. We specialize in competitive employment and e-commerce services, ensuring you have access to experienced and reliable staff when you need them most.";

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { value: "08+", label: "Years of experience" },
    Stat { value: "500+", label: "Completed placements" },
    Stat { value: "24/7", label: "Support available" },
];

/// A labelled progress bar.
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

pub const SKILLS: [Skill; 4] = [
    Skill { name: "Quality Standards", percent: 100 },
    Skill { name: "Pre-screening Process", percent: 95 },
    Skill { name: "Rapid Fulfillment", percent: 90 },
    Skill { name: "Client Satisfaction", percent: 98 },
];

pub struct Reason {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const REASONS: [Reason; 4] = [
    Reason {
        title: "Quality over Quantity",
        detail: "We never take an order unless we can fulfill it at the highest standard",
    },
    Reason {
        title: "Extensive Pre-screening",
        detail: "Background checks, reference verification, and skills testing",
    },
    Reason {
        title: "Rapid Fulfillment",
        detail: "Our large database allows us to provide staff at short notice",
    },
    Reason {
        title: "Flexible Agreements",
        detail: "Non-binding, no upfront commitments, opt-out anytime",
    },
];

/// A card in the services or industries grid.
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub const SERVICES: [Card; 6] = [
    Card {
        icon: "👥",
        title: "Candidate Sourcing",
        detail: "Finding the right candidates for your roles with thorough screening",
    },
    Card {
        icon: "⚙️",
        title: "Forklift Testing",
        detail: "In-house forklift testing centre with certified instructors",
    },
    Card {
        icon: "🏅",
        title: "Background Checks",
        detail: "Criminal background checks and reference verification when required",
    },
    Card {
        icon: "📅",
        title: "Payroll Management",
        detail: "Complete payroll services including taxes, WSIB management",
    },
    Card {
        icon: "⛑️",
        title: "Safety Training",
        detail: "Health & safety training including WHMIS, CPR, and certifications",
    },
    Card {
        icon: "🚚",
        title: "Transportation",
        detail: "Ride accommodations and transportation solutions when necessary",
    },
];

pub const INDUSTRIES: [Card; 8] = [
    Card { icon: "🚚", title: "Drivers", detail: "G, DZ, AZ License holders" },
    Card { icon: "⚙️", title: "Forklift Operators", detail: "Counterbalance, Raymond Reach" },
    Card { icon: "📦", title: "Machine Operators", detail: "Production & Manufacturing" },
    Card { icon: "👥", title: "Shippers/Receivers", detail: "Warehouse & Logistics" },
    Card { icon: "⚙️", title: "Production Workers", detail: "Assembly & Quality Control" },
    Card { icon: "⛑️", title: "General Labour", detail: "Various Industries" },
    Card { icon: "🏅", title: "Skilled Trades", detail: "Professional Specialists" },
    Card { icon: "📦", title: "More Roles", detail: "Contact for specific needs" },
];

pub struct Term {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const TERMS: [Term; 3] = [
    Term { title: "Service Rates", lines: &["Competitive % on top of wages"] },
    Term { title: "Payment Terms", lines: &["Net 30 Days"] },
    Term { title: "Agreement", lines: &["Flexible, non-binding", "No upfront costs"] },
];

pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTACT_DETAILS: [ContactDetail; 4] = [
    ContactDetail { icon: "📞", label: "Phone", lines: &["905-904-1590"] },
    ContactDetail { icon: "✉️", label: "Email", lines: &["staffing@primetransgroup.ca"] },
    ContactDetail {
        icon: "📍",
        label: "Address",
        lines: &["7050 Bramalea Rd, Unit #14A", "Mississauga, ON L5S 1T1"],
    },
    ContactDetail { icon: "🌐", label: "Website", lines: &["www.primetransgroup.ca"] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_bars_fit_their_track() {
        assert!(SKILLS.iter().all(|skill| skill.percent <= 100));
    }

    #[test]
    fn multi_line_blocks_are_not_empty() {
        assert!(TERMS.iter().all(|term| !term.lines.is_empty()));
        assert!(CONTACT_DETAILS.iter().all(|detail| !detail.lines.is_empty()));
    }

    #[test]
    fn tagline_matches_founding_year() {
        assert!(TAGLINE.ends_with(&FOUNDED.to_string()));
    }
}
