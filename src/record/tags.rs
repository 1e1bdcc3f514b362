/// Entry types of a literature list record.
///
/// Each entry line starts with a four letter tag followed by a colon, e.g.
///
/// ```text
/// NOVL: Austen, Jane. "Mansfield Park"
/// ```
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum EntryTag {
    /// ADPT - Adapted literary source
    Adaptation,
    /// BOOK - Monographic book
    Book,
    /// CRIT - Printed media review
    Critique,
    /// ESSY - Printed essay
    Essay,
    /// IVIW - Interview with cast or crew
    Interview,
    /// MOVI - Movie title, year and series details
    Movie,
    /// NOVL - Original literary source
    Novel,
    /// OTHR - Other literature
    Other,
    /// PROT - Production protocol
    ProductionProtocol,
    /// SCRP - Published screenplay
    Screenplay,
}

/// Field layout an entry is parsed with.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum EntryShape {
    /// Monographic layout, see [`crate::Book`]
    Book,
    /// Periodical layout, see [`crate::Publication`]
    Publication,
}

impl EntryTag {
    /// Every literature entry tag, in the order a record is assembled.
    pub const LITERATURE: [EntryTag; 9] = [
        Self::Adaptation,
        Self::Book,
        Self::Novel,
        Self::Critique,
        Self::Essay,
        Self::Interview,
        Self::Other,
        Self::ProductionProtocol,
        Self::Screenplay,
    ];

    /// Literature entry tags using the [`EntryShape::Book`] layout.
    pub const BOOK_LIKE: [EntryTag; 3] = [Self::Adaptation, Self::Book, Self::Novel];

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "ADPT" => Some(Self::Adaptation),
            "BOOK" => Some(Self::Book),
            "CRIT" => Some(Self::Critique),
            "ESSY" => Some(Self::Essay),
            "IVIW" => Some(Self::Interview),
            "MOVI" => Some(Self::Movie),
            "NOVL" => Some(Self::Novel),
            "OTHR" => Some(Self::Other),
            "PROT" => Some(Self::ProductionProtocol),
            "SCRP" => Some(Self::Screenplay),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Adaptation => "ADPT",
            Self::Book => "BOOK",
            Self::Critique => "CRIT",
            Self::Essay => "ESSY",
            Self::Interview => "IVIW",
            Self::Movie => "MOVI",
            Self::Novel => "NOVL",
            Self::Other => "OTHR",
            Self::ProductionProtocol => "PROT",
            Self::Screenplay => "SCRP",
        }
    }

    /// The layout of this entry type, or `None` for the `MOVI` line.
    pub fn shape(&self) -> Option<EntryShape> {
        match self {
            Self::Adaptation | Self::Book | Self::Novel => Some(EntryShape::Book),
            Self::Critique
            | Self::Essay
            | Self::Interview
            | Self::Other
            | Self::ProductionProtocol
            | Self::Screenplay => Some(EntryShape::Publication),
            Self::Movie => None,
        }
    }
}
