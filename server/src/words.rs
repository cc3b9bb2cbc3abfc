//! Word pool served by `GET /words`.
//!
//! The pool repeats some words across themes; draws sample distinct
//! positions, so a single draw can still contain the same word twice.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Number of words returned per draw.
pub const WORDS_PER_DRAW: usize = 20;

/// Kid-friendly vocabulary.
pub const WORD_POOL: &[&str] = &[
    "tree", "cloud", "rain", "snow", "sun", "moon", "star", "rock", "leaf", "lake",
    "hill", "beach", "island", "sand", "wind", "sky", "flower", "grass", "river", "pond",
    "bush", "petal", "shell", "twig", "mud", "berry", "acorn", "log", "pebble", "root",
    "moss", "dew", "wave", "bud", "branch", "pine", "rose", "daisy", "clover", "seed",
    "cat", "dog", "rabbit", "bear", "fox", "owl", "duck", "frog", "fish", "bird",
    "horse", "monkey", "turtle", "mouse", "lion", "tiger", "elephant", "penguin", "bee", "butterfly",
    "puppy", "kitten", "pony", "goat", "sheep", "pig", "cow", "hen", "chick", "crab",
    "snail", "ant", "worm", "bat", "deer", "swan", "goose", "seal", "otter", "ladybug",
    "apple", "banana", "grape", "cherry", "lemon", "peach", "carrot", "potato", "cookie", "cake",
    "bread", "cheese", "milk", "juice", "egg", "honey", "candy", "icecream", "pizza", "popcorn",
    "pear", "orange", "plum", "melon", "berry", "corn", "bean", "rice", "cracker", "waffle",
    "toast", "jam", "butter", "yogurt", "cereal", "muffin", "donut", "pancake", "syrup", "nut",
    "ball", "book", "box", "cup", "plate", "spoon", "fork", "bowl", "chair", "table",
    "pencil", "pen", "crayon", "toy", "block", "doll", "car", "train", "truck", "robot",
    "drum", "bell", "kite", "puzzle", "game", "lamp", "clock", "bag", "hat", "shoe",
    "sock", "scarf", "brush", "ribbon", "sticker", "coin", "key", "ring", "button", "towel",
    "house", "home", "school", "park", "garden", "store", "zoo", "farm", "room", "yard",
    "pool", "tent", "cabin", "barn", "forest", "playground", "bridge", "road", "hill", "cave",
    "castle", "tower", "treehouse", "bus", "train", "boat", "ship", "plane", "station", "market",
    "beach", "island", "mountain", "field", "valley", "river", "lake", "pond", "dock", "pier",
    "dream", "idea", "story", "art", "music", "dance", "song", "game", "play", "magic",
    "wish", "smile", "laugh", "hug", "love", "peace", "hope", "joy", "fun", "friend",
    "team", "party", "gift", "star", "hero", "quest", "adventure", "puzzle", "race", "goal",
    "win", "draw", "build", "make", "find", "share", "help", "learn", "read", "write",
    "run", "walk", "jump", "swim", "fly", "climb", "sing", "dance", "draw", "play",
    "build", "make", "find", "hide", "seek", "catch", "throw", "kick", "spin", "hop",
    "skip", "slide", "swing", "dig", "paint", "color", "read", "write", "count", "laugh",
    "smile", "wave", "clap", "cheer", "hug", "yawn", "nap", "rest", "look", "listen",
    "robot", "computer", "phone", "tablet", "tv", "camera", "radio", "clock", "lamp", "fan",
    "car", "bus", "train", "boat", "plane", "rocket", "drone", "game", "remote", "light",
    "bell", "mic", "speaker", "mouse", "keyboard", "screen", "watch", "alarm", "battery", "plug",
    "wheel", "gear", "tool", "button", "switch", "cord", "tape", "film", "chip", "disk",
    "red", "blue", "green", "yellow", "purple", "orange", "pink", "black", "white", "brown",
    "gray", "gold", "silver", "soft", "hard", "smooth", "rough", "shiny", "bright", "dark",
    "small", "big", "short", "tall", "fast", "slow", "warm", "cool", "sweet", "funny",
    "happy", "silly", "brave", "kind", "quiet", "loud", "clean", "messy", "new", "old",
    "head", "face", "eye", "ear", "nose", "mouth", "tooth", "tongue", "chin", "cheek",
    "hair", "neck", "shoulder", "arm", "elbow", "wrist", "hand", "finger", "thumb", "nail",
    "chest", "back", "waist", "hip", "leg", "knee", "ankle", "foot", "toe", "skin",
    "smile", "laugh", "wink", "blink", "wave", "hug", "jump", "run", "clap", "yawn",
    "wild", "calm", "loud", "quiet", "bright", "dark", "clear", "clean", "full", "empty",
    "open", "closed", "wet", "dry", "awake", "asleep", "alive", "young", "old", "new",
    "fresh", "sweet", "simple", "common", "real", "fun", "silly", "happy", "brave", "kind",
    "cool", "warm", "soft", "hard", "smooth", "rough", "shiny", "messy", "fast", "slow",
    "shirt", "pants", "dress", "hat", "shoe", "sock", "coat", "scarf", "glove", "belt",
    "cap", "jacket", "sweater", "boot", "sandal", "pocket", "button", "zipper", "collar", "cuff",
    "hem", "seam", "fabric", "cotton", "wool", "lace", "pattern", "stripe", "polka", "plaid",
    "bow", "tie", "clip", "band", "crown", "mask", "apron", "mitt", "vest", "robe",
];

/// Draw `count` words from distinct pool positions, in random order.
///
/// Returns the whole pool (shuffled) when `count` exceeds its size.
pub fn sample_words<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    WORD_POOL
        .choose_multiple(rng, count)
        .map(|w| (*w).to_owned())
        .collect()
}

/// Draw [`WORDS_PER_DRAW`] words with the thread-local RNG.
#[must_use]
pub fn draw() -> Vec<String> {
    sample_words(&mut rand::rng(), WORDS_PER_DRAW)
}

#[cfg(test)]
#[path = "words_test.rs"]
mod tests;
