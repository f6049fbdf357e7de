//! Canned fortunes for offline demo mode.

use rand::Rng;

/// Sample responses returned when no API key is configured.
pub(crate) const SAMPLE_FORTUNES: &[&str] = &[
    "The light in this photo carries bright blue and violet tones, a sign that \
     your creative and intuitive energies are on the rise. An unexpected \
     encounter in the coming weeks may become a turning point for a long-held \
     goal.",
    "Jupiter's influence is unmistakable here. The next three months bring \
     chances to grow and expand; if there is a project you have been putting \
     off, now is the moment to begin. Support may arrive from someone you \
     least expect.",
    "Your energy field is mid-transformation. The textures in this image \
     suggest you have just closed one cycle and stepped into a new beginning. \
     Water's influence colors the coming month, so weigh emotional decisions \
     twice before acting.",
    "The signature in this picture shows a strong connection to your sense of \
     purpose. Mars lends you courage and resolve right now; do not be \
     surprised when an opening appears for a dream you shelved long ago. \
     Trust your instincts.",
    "Venus makes itself felt in this photo. Expect warm developments in \
     partnerships and, with them, a gentle easing of material worries. A \
     green field of energy surrounds you, pointing to a season of growth and \
     good health.",
];

/// Pick one sample at random.
pub(crate) fn pick() -> &'static str {
    let index = rand::rng().random_range(0..SAMPLE_FORTUNES.len());
    SAMPLE_FORTUNES[index]
}
