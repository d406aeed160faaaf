//! Marker tables for boilerplate detection.
//!
//! Both lists are plain data so new markers can be added without touching
//! the cleaning algorithm. `JUNK_MARKERS` truncate a field from the first
//! match onward; `FAKE_BIO_OPENERS` reject the entire field.

/// Platform boilerplate markers. These appear as tails appended to
/// otherwise valid bios and wiki summaries; everything from the earliest
/// match onward is dropped.
pub const JUNK_MARKERS: &[&str] = &[
    // English release calendars
    "WELCOME TO GENIUS",
    "RELEASE CALENDAR",
    "HOW CAN YOU HELP",
    // Korean/Japanese release calendars
    "발매 달력",
    "This page highlights all notable",
    "This page highlights the notable",
    // Social / CTA
    "Follow us on Twitter",
    "Follow us on Instagram",
    "If you would like to learn more about this endeavor",
    "consider checking out these helpful pages",
    // Platform self-descriptions
    "Genius is the world's biggest",
    "Genius is the ultimate source",
    "Screen Genius is the TV and movie tag",
    // Community/editorial boilerplate
    "Learn more about Genius Romanization",
    "GJ Essentials",
    "Genius English Translations by visiting",
    "This artist page is to be used as the primary artist",
    "For more information on how to add movie",
    // Editorial instructions leaked into content
    "Singles are listed with a hyperlink",
    "Adding songs:",
    "Adding lyrics:",
    "edit the lyrics or add a comment",
    "don't forget to hit that like button",
    // Interview CTAs
    "To read Genius' full interview, click here",
    // Non-English / variant release calendars
    "Singles Release Calendar!",
    "Album Release Calendar!",
    "album releases, visit this page",
    // More editorial instructions
    "Do not edit the lyrics",
    "Edit the lyrics to add",
    "the suggestion box to discuss",
    // YouTube-style CTAs
    "subscribe for more music",
    // Social media CTAs
    "follow @",
    "Follow @",
    // Misc editorial leaks
    "For a full list of Norwegian contestants in the MGP, click here",
    "Click here to see passages from",
    "Please don't edit the lyrics",
    // Turkish translation-community boilerplate
    "Genius'ta çeviri yapmaya",
    "Genius'ta Şarkı Nasıl",
    // Apple Music partnership boilerplate (mid-bio)
    "which allowed for smarter lyrics in the Apple Music",
    "embedded music player on Genius pages",
    "lyrics in the Apple Music & Genius apps",
    // Misc mid-text junk
    "Please don\u{2019}t edit the lyrics",
    "If you enjoyed this deep dive",
    // Romanizations in credits
    "by Genius Romanizations",
    // Community project CTA
    "If you would like to join the project, check out",
    // Theatre/cast page CTA
    "Learn more about their jobs in the theatre here",
    // Book promo (wiki summary is a book ad, not a track description)
    "Buy the Book",
    // Phone/ticket/linktree promo spam
    "linktr.ee/",
    "Tickets Tour",
];

/// Fake artist bios. When the "artist" is a community/aggregate page the
/// whole bio field is platform self-description; truncation would leave
/// nothing meaningful, so the field is emptied instead.
pub const FAKE_BIO_OPENERS: &[&str] = &[
    "Founded in 2009, Genius is",
    "Genius is a unique multimedia",
    "Genius Romanizations is the place",
    "Genius English Translations",
    "Genius Korean Translations",
    "Genius Romanizations",
    "Als Teil der Screen Genius",
    "Every single episode of this classic sitcom is now housed on Genius",
];
