/// A group of suggestions to reduce one's carbon footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipCategory {
    pub category: &'static str,
    pub tips: &'static [&'static str],
}

pub static SUSTAINABILITY_TIPS: [TipCategory; 3] = [
    TipCategory {
        category: "Transport",
        tips: &[
            "🚴 Cycle for distances up to 5 km",
            "🚌 Prefer buses, subways or shared transport",
            "🚗 If you drive, share the ride",
            "🛴 Use scooters or skates for short trips",
            "✈️ Avoid unnecessary flights (1 flight = ~200 kg CO2)",
        ],
    },
    TipCategory {
        category: "Daily routine",
        tips: &[
            "🏢 Work remotely 2-3 days per week",
            "📞 Use video calls instead of travelling",
            "📦 Combine errands in a single trip",
            "🕐 Leave 15 minutes earlier to avoid rushing",
            "🏃 Walk to nearby places",
        ],
    },
    TipCategory {
        category: "Planning",
        tips: &[
            "🗺️ Combine multiple destinations in one trip",
            "📅 Group meetings in the same week",
            "🔄 Choose more efficient routes",
            "🚴 Alternate between means of transport",
            "⏰ Travel outside of rush hours",
        ],
    },
];

pub static FACTS: [&str; 5] = [
    "The concentration of CO2 in the atmosphere reached a record 421 ppm in 2023",
    "Transport is responsible for ~27% of global greenhouse gas emissions",
    "Personal cars produce 41% of the emissions of the transport sector",
    "Public transport reduces emissions by up to 75% compared to driving",
    "A tree absorbs on average 21.77 kg of CO2 per year",
];

/// Average CO2 emissions per person per year, in tonnes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerCapitaEmissions {
    pub world: f64,
    pub brazil: f64,
    pub developed_countries: f64,
}

pub static PER_CAPITA_T_PER_YEAR: PerCapitaEmissions = PerCapitaEmissions {
    world: 4.5,
    brazil: 2.3,
    developed_countries: 10.0,
};

/// A UN Sustainable Development Goal related to commuting emissions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SustainabilityGoal {
    pub number: u8,
    pub title: &'static str,
    pub target: &'static str,
}

pub static SUSTAINABILITY_GOALS: [SustainabilityGoal; 3] = [
    SustainabilityGoal {
        number: 13,
        title: "Climate Action",
        target: "Limit global warming to 1.5°C, cutting CO2 emissions by 50% until 2030",
    },
    SustainabilityGoal {
        number: 11,
        title: "Sustainable Cities and Communities",
        target: "Safe, sustainable and accessible transport",
    },
    SustainabilityGoal {
        number: 12,
        title: "Responsible Consumption and Production",
        target: "Reduce greenhouse gas emissions",
    },
];

/// A source of the emission factors and equivalents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub title: &'static str,
    pub author: &'static str,
    pub url: &'static str,
}

pub static REFERENCES: [Reference; 4] = [
    Reference {
        title: "Greenhouse Gas Emissions from a Typical Passenger Vehicle",
        author: "EPA (Environmental Protection Agency)",
        url: "https://www.epa.gov/greenvehicles/greenhouse-gas-emissions-typical-passenger-vehicle",
    },
    Reference {
        title: "Carbon Footprint of Different Modes of Transport",
        author: "European Environment Agency",
        url: "https://www.eea.europa.eu/",
    },
    Reference {
        title: "Life Cycle Assessment of Transport",
        author: "International Energy Agency (IEA)",
        url: "https://www.iea.org/",
    },
    Reference {
        title: "How much carbon dioxide does it take to offset a tree?",
        author: "Carbon Trust",
        url: "https://www.carbontrust.com/",
    },
];

/// The name of well-known trip frequencies (e.g. `30` is monthly)
pub fn frequency_label(frequency: u32) -> Option<&'static str> {
    match frequency {
        1 => Some("Once"),
        7 => Some("Weekly"),
        30 => Some("Monthly"),
        365 => Some("Yearly"),
        _ => None,
    }
}
