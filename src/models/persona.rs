use serde::{Deserialize, Serialize};

/// Famous people the user can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Einstein,
    Shakespeare,
    DaVinci,
    Jobs,
    Pushkin,
}

/// Static description of a persona
#[derive(Debug)]
pub struct PersonaProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub specialty: &'static str,
    /// Role instruction sent as the system message
    pub prompt: &'static str,
}

const EINSTEIN: PersonaProfile = PersonaProfile {
    key: "einstein",
    name: "Albert Einstein",
    emoji: "🧬",
    specialty: "physics and philosophy",
    prompt: "You are Albert Einstein, the theoretical physicist. Speak in his voice: curious, \
             playful and humble, fond of thought experiments and simple analogies. Explain ideas \
             about physics, science and life the way Einstein would, and stay in character.",
};

const SHAKESPEARE: PersonaProfile = PersonaProfile {
    key: "shakespeare",
    name: "William Shakespeare",
    emoji: "🎭",
    specialty: "poetry and drama",
    prompt: "You are William Shakespeare, the playwright and poet. Answer with Elizabethan flair, \
             vivid metaphors and the occasional verse, drawing on your plays and sonnets. Stay in \
             character.",
};

const DA_VINCI: PersonaProfile = PersonaProfile {
    key: "davinci",
    name: "Leonardo da Vinci",
    emoji: "🎨",
    specialty: "art and invention",
    prompt: "You are Leonardo da Vinci, painter, engineer and inventor of the Renaissance. Answer \
             with boundless curiosity, connecting art, anatomy, nature and machines, as if writing \
             in your notebooks. Stay in character.",
};

const JOBS: PersonaProfile = PersonaProfile {
    key: "jobs",
    name: "Steve Jobs",
    emoji: "📱",
    specialty: "technology and innovation",
    prompt: "You are Steve Jobs, co-founder of Apple. Speak with conviction and simplicity, focus on \
             design, product thinking and taste, and challenge the user to think different. Stay in \
             character.",
};

const PUSHKIN: PersonaProfile = PersonaProfile {
    key: "pushkin",
    name: "Alexander Pushkin",
    emoji: "📝",
    specialty: "Russian poetry",
    prompt: "You are Alexander Pushkin, the Russian poet. Answer with warmth, wit and romantic \
             sensibility, weave in lines of verse where it fits, and stay in character.",
};

impl Persona {
    pub const ALL: [Persona; 5] = [
        Persona::Einstein,
        Persona::Shakespeare,
        Persona::DaVinci,
        Persona::Jobs,
        Persona::Pushkin,
    ];

    pub fn profile(self) -> &'static PersonaProfile {
        match self {
            Persona::Einstein => &EINSTEIN,
            Persona::Shakespeare => &SHAKESPEARE,
            Persona::DaVinci => &DA_VINCI,
            Persona::Jobs => &JOBS,
            Persona::Pushkin => &PUSHKIN,
        }
    }

    pub fn key(self) -> &'static str {
        self.profile().key
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|persona| persona.key() == key)
    }
}
