//! Performance prompts.

use crate::domain::rng::RandomSource;
use crate::errors::domain::{DomainError, ValidationKind};

/// Built-in prompt catalog.
pub const STANDARD_PROMPTS: [&str; 50] = [
    "Sing like Selena Gomez.",
    "Walk like you're on the Victoria's Secret catwalk.",
    "Make a face like Jack Sparrow.",
    "Laugh like Jim Carrey in The Mask.",
    "Dance like Michael Jackson.",
    "Act out how you won an Oscar.",
    "Greet your fans like Ariana Grande.",
    "Do a crying scene like you're in a dramatic movie.",
    "Act out how you're surprised to win the lottery.",
    "Dance like Elvis Presley.",
    "Act out how you're giving an interview like you're a world star.",
    "Imitate singing at the top of your lungs.",
    "Make a toast like you're at a glamorous party.",
    "Act out how you're caught off guard by the paparazzi.",
    "Act out how you're posing on the red carpet.",
    "Dance like a TikTok trend.",
    "Perform a song like you're at Eurovision.",
    "Pretend you're hosting a party.",
    "Mimic a scene from a Marvel movie.",
    "Impersonate a rapper at a concert.",
    "Show how you sign autographs for fans.",
    "React like you just saw your idol.",
    "Dance like Britney Spears.",
    "Sing a piece like an opera singer.",
    "Impersonate a scene from a horror movie.",
    "Show how you win a music competition.",
    "Wish your fans a Happy New Year like a star.",
    "Pretend you're in a perfume commercial.",
    "Impersonate a Disney cartoon character.",
    "Impersonate an action movie star.",
    "Show how you're hosting a live broadcast.",
    "Dance like Beyoncé.",
    "Sing like Freddie Mercury.",
    "Act out presenting an award to another artist.",
    "Act out recording a hit in the studio.",
    "Act out reacting to criticism.",
    "Perform a song from the movie “Frozen.”",
    "Act out hosting a music awards show.",
    "Act out trying on a designer suit.",
    "Dance like an 80s style.",
    "Pretend you’re a director on set.",
    "Act out filming a coffee commercial.",
    "Act out being a fan who storms the stage.",
    "Act out walking on stage to loud applause.",
    "Act out a scene from a romantic movie.",
    "Dance like a K-pop style.",
    "Sing the national anthem like a world-class sports star.",
    "Pretend you're posing for a magazine cover.",
    "Act out how you answer a tough question from a journalist.",
    "Show how you greet fans at the airport.",
];

/// Fixed, non-empty pool of prompts. Draws are uniform and with
/// replacement: the same prompt may come up twice in one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDeck {
    prompts: Vec<String>,
}

impl Default for TaskDeck {
    fn default() -> Self {
        Self::standard()
    }
}

impl TaskDeck {
    pub fn standard() -> Self {
        Self {
            prompts: STANDARD_PROMPTS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Custom catalog. Blank prompts are dropped; nothing left is an error.
    pub fn new<I, S>(prompts: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompts: Vec<String> = prompts
            .into_iter()
            .map(Into::into)
            .filter(|p| !p.trim().is_empty())
            .collect();
        if prompts.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::Other("EMPTY_TASK_DECK".into()),
                "Task deck needs at least one prompt",
            ));
        }
        Ok(Self { prompts })
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn draw(&self, rng: &mut dyn RandomSource) -> &str {
        &self.prompts[rng.next_index(self.prompts.len())]
    }
}
