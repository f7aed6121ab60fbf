//! Unlisted phrase replies, checked before the command registry.
//!
//! A phrase matches when its words are a prefix of the line's words (split
//! on single spaces, case-sensitive). `vim notes.txt` matches `vim`;
//! `sudo make me a sandwich now` matches the sandwich phrase.

struct EasterEgg {
    phrase: &'static [&'static str],
    reply: &'static str,
}

const SANDWICH: &str = "Nice try! But you don't need sudo here.\n\
Type 'contact' if you want to work together though! 😊";

const VIM: &str = "You: Starting vim...\n\
Me: I see you're a developer of culture!\n\
(Psst... there's no vim here, but checkout my GitHub!)";

const EMACS: &str = "Really? Emacs? I'm impressed you still use that!\n\
Try 'projects' to see what I've built instead!";

const HAPPINESS: &str = "Installing happiness... ✓\n\
happiness@1.0.0\n\
✨ Done! Type 'about' to see what makes me happy!";

const TOP: &str = "CPU: 5%  MEM: 12%  DISK: 23%\n\n\
That's your system performance if I were a real terminal!";

const MATRIX: &str = "Entering the matrix...\n\
01001000 01100101 01101100 01101100 01101111 00100000 01010111 01101111 01110010 01101100 01100100";

const HACK: &str = "Accessing mainframe... 10%\n\
Bypassing security... 35%\n\
Decrypting files... 60%\n\
Wait, this is just a portfolio terminal 😅\n\
Try 'projects' to see what I actually built!";

const ANSWER: &str = "The answer to life, the universe, and everything is 42.\n\
But the answer to all your development needs might be in my 'projects'!";

const YO: &str = "Yo! This is a terminal, not a chat app 😄\n\
Try 'help' to see what you can do here!";

const HELLO: &str = "Hello there! 👋\n\
Welcome to my interactive portfolio terminal!\n\
Type 'help' to see what I can do!";

const TIME: &str = "What do you think this is, a clock?\n\
Try 'date' for time or 'projects' for my work!";

const ALIENS: &str = "Error 418: I'm a teapot.\n\
Just kidding! No aliens here, just a developer passionate about code 😄";

/// Checked in order; the first match wins.
const EGGS: &[EasterEgg] = &[
    EasterEgg {
        phrase: &["sudo", "make", "me", "a", "sandwich"],
        reply: SANDWICH,
    },
    EasterEgg {
        phrase: &["vim"],
        reply: VIM,
    },
    EasterEgg {
        phrase: &["vi"],
        reply: VIM,
    },
    EasterEgg {
        phrase: &["emacs"],
        reply: EMACS,
    },
    EasterEgg {
        phrase: &["npm", "install", "happiness"],
        reply: HAPPINESS,
    },
    EasterEgg {
        phrase: &["top"],
        reply: TOP,
    },
    EasterEgg {
        phrase: &["htop"],
        reply: TOP,
    },
    EasterEgg {
        phrase: &["matrix"],
        reply: MATRIX,
    },
    EasterEgg {
        phrase: &["hack"],
        reply: HACK,
    },
    EasterEgg {
        phrase: &["hacktheplanet"],
        reply: HACK,
    },
    EasterEgg {
        phrase: &["42"],
        reply: ANSWER,
    },
    EasterEgg {
        phrase: &["yo"],
        reply: YO,
    },
    EasterEgg {
        phrase: &["hello"],
        reply: HELLO,
    },
    EasterEgg {
        phrase: &["hi"],
        reply: HELLO,
    },
    EasterEgg {
        phrase: &["time"],
        reply: TIME,
    },
    EasterEgg {
        phrase: &["aliens"],
        reply: ALIENS,
    },
];

/// The canned reply for `line`, if it starts with an easter-egg phrase.
pub fn lookup(line: &str) -> Option<&'static str> {
    let words: Vec<&str> = line.trim().split(' ').collect();
    EGGS.iter()
        .find(|egg| {
            words.len() >= egg.phrase.len()
                && words.iter().zip(egg.phrase).all(|(w, p)| w == p)
        })
        .map(|egg| egg.reply)
}

/// Every phrase, space-joined, in match order.
pub fn phrases() -> impl Iterator<Item = String> {
    EGGS.iter().map(|egg| egg.phrase.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandwich() {
        let reply = lookup("sudo make me a sandwich").unwrap();
        assert!(reply.contains("Nice try! But you don't need sudo here."));
    }

    #[test]
    fn partial_phrase_does_not_match() {
        assert_eq!(lookup("sudo make me"), None);
        assert_eq!(lookup("npm install"), None);
        assert_eq!(lookup("sudo"), None);
    }

    #[test]
    fn trailing_words_still_match() {
        assert_eq!(lookup("vim notes.txt"), Some(VIM));
        assert_eq!(lookup("npm install happiness --save"), Some(HAPPINESS));
    }

    #[test]
    fn match_is_case_and_spacing_sensitive() {
        assert_eq!(lookup("VIM"), None);
        assert_eq!(lookup("sudo  make me a sandwich"), None);
        assert_eq!(lookup("hacker"), None);
    }

    #[test]
    fn aliases_share_replies() {
        assert_eq!(lookup("vi"), lookup("vim"));
        assert_eq!(lookup("htop"), lookup("top"));
        assert_eq!(lookup("hacktheplanet"), lookup("hack"));
        assert_eq!(lookup("hi"), lookup("hello"));
    }

    #[test]
    fn every_phrase_matches_itself() {
        for phrase in phrases() {
            assert!(lookup(&phrase).is_some(), "{phrase}");
        }
        assert_eq!(phrases().count(), 16);
    }
}
