use serde::{Deserialize, Serialize};

/// Fixed set of icon identifiers a task can carry.
///
/// The presentation layer resolves these to actual glyphs; the engine only
/// stores the name. Unknown names from older data fall back to [`Icon::Circle`]
/// instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Activity,
    Award,
    BadgeX,
    Bell,
    Book,
    BookOpen,
    Brain,
    BrainCircuit,
    Briefcase,
    Calendar,
    Check,
    CheckCircle,
    Clock,
    Coffee,
    Droplet,
    Dumbbell,
    FileEdit,
    Flag,
    Gift,
    Globe,
    Headphones,
    Heart,
    Home,
    Lightbulb,
    Lotus,
    Mail,
    Moon,
    Music,
    Pencil,
    PenLine,
    Phone,
    Sparkles,
    Star,
    Sun,
    Target,
    Trophy,
    User,
    X,
    Zap,
    #[serde(other)]
    Circle,
}

impl Icon {
    pub const ALL: [Icon; 40] = [
        Icon::Activity,
        Icon::Award,
        Icon::BadgeX,
        Icon::Bell,
        Icon::Book,
        Icon::BookOpen,
        Icon::Brain,
        Icon::BrainCircuit,
        Icon::Briefcase,
        Icon::Calendar,
        Icon::Check,
        Icon::CheckCircle,
        Icon::Circle,
        Icon::Clock,
        Icon::Coffee,
        Icon::Droplet,
        Icon::Dumbbell,
        Icon::FileEdit,
        Icon::Flag,
        Icon::Gift,
        Icon::Globe,
        Icon::Headphones,
        Icon::Heart,
        Icon::Home,
        Icon::Lightbulb,
        Icon::Lotus,
        Icon::Mail,
        Icon::Moon,
        Icon::Music,
        Icon::Pencil,
        Icon::PenLine,
        Icon::Phone,
        Icon::Sparkles,
        Icon::Star,
        Icon::Sun,
        Icon::Target,
        Icon::Trophy,
        Icon::User,
        Icon::X,
        Icon::Zap,
    ];

    /// The stored name of this icon, as it appears in persisted JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Activity => "Activity",
            Icon::Award => "Award",
            Icon::BadgeX => "BadgeX",
            Icon::Bell => "Bell",
            Icon::Book => "Book",
            Icon::BookOpen => "BookOpen",
            Icon::Brain => "Brain",
            Icon::BrainCircuit => "BrainCircuit",
            Icon::Briefcase => "Briefcase",
            Icon::Calendar => "Calendar",
            Icon::Check => "Check",
            Icon::CheckCircle => "CheckCircle",
            Icon::Circle => "Circle",
            Icon::Clock => "Clock",
            Icon::Coffee => "Coffee",
            Icon::Droplet => "Droplet",
            Icon::Dumbbell => "Dumbbell",
            Icon::FileEdit => "FileEdit",
            Icon::Flag => "Flag",
            Icon::Gift => "Gift",
            Icon::Globe => "Globe",
            Icon::Headphones => "Headphones",
            Icon::Heart => "Heart",
            Icon::Home => "Home",
            Icon::Lightbulb => "Lightbulb",
            Icon::Lotus => "Lotus",
            Icon::Mail => "Mail",
            Icon::Moon => "Moon",
            Icon::Music => "Music",
            Icon::Pencil => "Pencil",
            Icon::PenLine => "PenLine",
            Icon::Phone => "Phone",
            Icon::Sparkles => "Sparkles",
            Icon::Star => "Star",
            Icon::Sun => "Sun",
            Icon::Target => "Target",
            Icon::Trophy => "Trophy",
            Icon::User => "User",
            Icon::X => "X",
            Icon::Zap => "Zap",
        }
    }

    /// Look up an icon by its stored name.
    pub fn from_name(name: &str) -> Option<Icon> {
        Icon::ALL.iter().copied().find(|icon| icon.name() == name)
    }

    /// Look up an icon by name, falling back to [`Icon::Circle`] for unknown names.
    pub fn from_name_or_default(name: &str) -> Icon {
        Icon::from_name(name).unwrap_or(Icon::Circle)
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_lookup_is_a_bijection_over_the_fixed_set() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_name(icon.name()), Some(icon));
        }
    }

    #[test]
    fn unknown_names_fall_back_to_circle() {
        assert_eq!(Icon::from_name("Lasso"), None);
        assert_eq!(Icon::from_name_or_default("Lasso"), Icon::Circle);

        // The same fallback applies when deserializing persisted data.
        let icon: Icon = serde_json::from_str("\"Lasso\"").unwrap();
        assert_eq!(icon, Icon::Circle);
    }

    #[test]
    fn serde_uses_the_stored_name() {
        let json = serde_json::to_string(&Icon::BookOpen).unwrap();
        assert_eq!(json, "\"BookOpen\"");
    }
}
