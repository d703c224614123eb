/// Locations that appear in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownLocation {
    MarALago,
    WestPalmBeach,
    Jupiter,
    Doral,
    Bedminster,
    Sterling,
    WashingtonDc,
    Scotland,
    LasVegas,
    Florida,   // generic fallback
    NewJersey, // generic fallback
    Philadelphia,
}

impl KnownLocation {
    pub const ALL: [KnownLocation; 12] = [
        KnownLocation::MarALago,
        KnownLocation::WestPalmBeach,
        KnownLocation::Jupiter,
        KnownLocation::Doral,
        KnownLocation::Bedminster,
        KnownLocation::Sterling,
        KnownLocation::WashingtonDc,
        KnownLocation::Scotland,
        KnownLocation::LasVegas,
        KnownLocation::Florida,
        KnownLocation::NewJersey,
        KnownLocation::Philadelphia,
    ];

    /// Name as written in the data file.
    pub fn name(&self) -> &'static str {
        match self {
            KnownLocation::MarALago => "Mar-a-Lago",
            KnownLocation::WestPalmBeach => "West Palm Beach, FL",
            KnownLocation::Jupiter => "Jupiter, FL",
            KnownLocation::Doral => "Doral, FL",
            KnownLocation::Bedminster => "Bedminster, NJ",
            KnownLocation::Sterling => "Sterling, VA",
            KnownLocation::WashingtonDc => "Washington, DC",
            KnownLocation::Scotland => "Scotland",
            KnownLocation::LasVegas => "Las Vegas, NV",
            KnownLocation::Florida => "Florida",
            KnownLocation::NewJersey => "New Jersey",
            KnownLocation::Philadelphia => "Philadelphia, PA",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        KnownLocation::ALL.into_iter().find(|l| l.name() == name)
    }
}
