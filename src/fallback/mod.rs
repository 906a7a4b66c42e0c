//! Canned answers used whenever the remote completion path is unavailable.
//! Pure keyword matching, no I/O, so the orchestrator can always resolve a
//! reply even when the proxy is down.

use once_cell::sync::Lazy;

use crate::config::persona::{ EMAIL, FIRST_NAME, JOB_TITLE, LOCATION, PHONE };

struct TopicBucket {
    keywords: &'static [&'static str],
    reply: String,
}

// Ordered by priority: the first bucket whose keyword appears in the input
// wins, so overlapping phrases resolve deterministically.
static TOPIC_BUCKETS: Lazy<Vec<TopicBucket>> = Lazy::new(|| {
    vec![
        TopicBucket {
            keywords: &["skill", "technology", "tech"],
            reply: format!(
                "{FIRST_NAME} is proficient in React, TypeScript, Node.js, Python, Django, \
                 PostgreSQL, and modern web technologies. He has experience in full-stack \
                 development. His expertise includes building scalable web applications, \
                 RESTful APIs, and creating intuitive user interfaces."
            ),
        },
        TopicBucket {
            keywords: &["project", "work", "portfolio"],
            reply: format!(
                "{FIRST_NAME} has completed 15+ projects including an AI image generator, a Job \
                 Portal app, web applications, and API services. His notable work includes a \
                 TCS Car Insurance Premium Scorecard, a collaborative doctor appointment \
                 booking system, and various web apps built with React."
            ),
        },
        TopicBucket {
            keywords: &["experience", "background", "career"],
            reply: format!(
                "{FIRST_NAME} has professional experience as a {JOB_TITLE}. He worked at Oasis \
                 Infobyte as a web developer intern, with hands-on experience building \
                 practical web solutions on real-world projects and strengthening technical \
                 skills through active, project-based learning."
            ),
        },
        TopicBucket {
            keywords: &["contact", "hire", "available", "email"],
            reply: format!(
                "{FIRST_NAME} is currently available for new work! You can reach him at {EMAIL} \
                 or call {PHONE}. He's based in {LOCATION}. He offers free consultations and \
                 typically responds within 24 hours."
            ),
        },
        TopicBucket {
            keywords: &["education", "learn", "study"],
            reply: format!(
                "{FIRST_NAME} is a continuous learner who stays updated with the latest \
                 technologies. He regularly contributes to open-source projects, attends tech \
                 conferences, and shares knowledge with the developer community. His learning \
                 approach combines hands-on projects with theoretical understanding."
            ),
        },
        TopicBucket {
            keywords: &["price", "cost", "rate", "budget"],
            reply: format!(
                "{FIRST_NAME} offers competitive rates based on project scope and requirements. \
                 He provides detailed quotes after understanding your specific needs. For \
                 accurate pricing, please contact him directly at {EMAIL} with your project \
                 details."
            ),
        },
        TopicBucket {
            keywords: &["hello", "hi", "hey"],
            reply: format!(
                "Hello! I'm {FIRST_NAME}'s AI assistant. I'm here to help you learn more about \
                 {FIRST_NAME}'s skills, experience, and projects. Feel free to ask me anything \
                 about his work, availability, or technical expertise!"
            ),
        },
        TopicBucket {
            keywords: &["thank", "thanks"],
            reply: format!(
                "You're welcome! If you have any other questions about {FIRST_NAME}'s work or \
                 would like to get in touch with him, feel free to ask. I'm here to help!"
            ),
        },
    ]
});

static DEFAULT_REPLY: Lazy<String> = Lazy::new(|| {
    format!(
        "I'd be happy to help you learn more about {FIRST_NAME}! You can ask me about his \
         technical skills, project experience, work background, or how to get in touch with \
         him. What would you like to know?"
    )
});

/// Maps a user utterance to a canned answer. Total and deterministic: every
/// input yields a non-empty reply, unmatched inputs fall through to a generic
/// prompt.
pub fn respond(input: &str) -> String {
    let normalized = input.to_lowercase();
    for bucket in TOPIC_BUCKETS.iter() {
        if bucket.keywords.iter().any(|keyword| normalized.contains(keyword)) {
            return bucket.reply.clone();
        }
    }
    DEFAULT_REPLY.clone()
}
