//! "How the Web Actually Works": a five-section explainer covering the client, DNS,
//! the server and the database.
//!
//! Scene lengths are declared once, in seconds at [`FPS`]. Section and composition totals
//! are derived from them with [`sequence_total`], so they cannot drift from the scenes
//! they describe.

use crate::animation::entrance::EntranceStyle;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::ExplainerResult;
use crate::scene::components::{BulletStyle, Tone};
use crate::scene::kinds::{
    Annotation, BulletList, CodeDisplay, ComparisonSplit, ConceptExplain, Connection,
    DiagramFlow, EndScreen, FlowDirection, FlowNode, HeadingEntrance, HookQuestion,
    KeyTakeaway, SceneKind, SectionTitle, Severity, SideEntrance, SplitSide, StatHighlight,
    Step, StepSequence, SummaryRecap, TitleIntro, VisualMetaphor, WarningCallout,
};
use crate::scene::overlays::{ParticleField, Watermark};
use crate::theme::Accent;
use crate::timeline::accumulator::sequence_total;
use crate::timeline::dsl::{CompositionBuilder, SectionBuilder};
use crate::timeline::model::{Composition, SceneSpec, Section, TransitionSpec};
use crate::transition::kind::Edge;

/// Registration id.
pub const ID: &str = "HowTheWebWorks";

/// Frames per second.
pub const FPS: u64 = 30;

/// Default fade length between scenes.
pub const T: u64 = 15;

const SLIDE_UP: u64 = 20;

/// Section 1 scene lengths: hook, title, section title, concept, steps, metaphor, takeaway.
pub const SECTION_1_SCENES: [u64; 7] = [5 * FPS, 8 * FPS, 3 * FPS, 8 * FPS, 8 * FPS, 6 * FPS, 5 * FPS];
/// Section 1 joins.
pub const SECTION_1_TRANSITIONS: [u64; 6] = [T; 6];

/// Section 2 scene lengths: section title, concept, diagram, stat, metaphor, takeaway.
pub const SECTION_2_SCENES: [u64; 6] = [3 * FPS, 7 * FPS, 10 * FPS, 5 * FPS, 6 * FPS, 5 * FPS];
/// Section 2 joins.
pub const SECTION_2_TRANSITIONS: [u64; 5] = [T; 5];

/// Section 3 scene lengths: section title, concept, diagram, code, bullets, takeaway.
pub const SECTION_3_SCENES: [u64; 6] = [3 * FPS, 7 * FPS, 10 * FPS, 12 * FPS, 7 * FPS, 5 * FPS];
/// Section 3 joins.
pub const SECTION_3_TRANSITIONS: [u64; 5] = [T; 5];

/// Section 4 scene lengths: section title, concept, comparison, warning, metaphor, takeaway.
pub const SECTION_4_SCENES: [u64; 6] = [3 * FPS, 7 * FPS, 8 * FPS, 6 * FPS, 6 * FPS, 5 * FPS];
/// Section 4 joins.
pub const SECTION_4_TRANSITIONS: [u64; 5] = [T; 5];

/// Section 5 scene lengths: section title, diagram, bullets, recap, end screen.
pub const SECTION_5_SCENES: [u64; 5] = [3 * FPS, 12 * FPS, 8 * FPS, 10 * FPS, 5 * FPS];
/// Section 5 joins; the diagram slides up into the bullets.
pub const SECTION_5_TRANSITIONS: [u64; 4] = [T, SLIDE_UP, T, T];

const fn derived(scenes: &[u64], transitions: &[u64]) -> u64 {
    match sequence_total(scenes, transitions) {
        Some(total) => total,
        None => panic!("section durations do not form a valid sequence"),
    }
}

/// Section 1 length in frames.
pub const SECTION_1_FRAMES: u64 = derived(&SECTION_1_SCENES, &SECTION_1_TRANSITIONS);
/// Section 2 length in frames.
pub const SECTION_2_FRAMES: u64 = derived(&SECTION_2_SCENES, &SECTION_2_TRANSITIONS);
/// Section 3 length in frames.
pub const SECTION_3_FRAMES: u64 = derived(&SECTION_3_SCENES, &SECTION_3_TRANSITIONS);
/// Section 4 length in frames.
pub const SECTION_4_FRAMES: u64 = derived(&SECTION_4_SCENES, &SECTION_4_TRANSITIONS);
/// Section 5 length in frames.
pub const SECTION_5_FRAMES: u64 = derived(&SECTION_5_SCENES, &SECTION_5_TRANSITIONS);

/// Number of sections.
pub const TOTAL_SECTIONS: usize = 5;

/// Composition length in frames.
pub const TOTAL_FRAMES: u64 =
    SECTION_1_FRAMES + SECTION_2_FRAMES + SECTION_3_FRAMES + SECTION_4_FRAMES + SECTION_5_FRAMES;

/// Build the composition.
///
/// `declared_frames` is set to [`TOTAL_FRAMES`], so the builder cross-checks the
/// compile-time total against the runtime accumulator.
pub fn how_the_web_works() -> ExplainerResult<Composition> {
    let fps = Fps::new(FPS as u32, 1)?;
    CompositionBuilder::new(ID, fps, Canvas::FULL_HD)
        .section(the_client()?)
        .section(dns_lookup()?)
        .section(the_server()?)
        .section(the_database()?)
        .section(full_picture()?)
        .particles(ParticleField {
            count: 25,
            speed: 0.3,
            opacity: 0.1,
            ..ParticleField::default()
        })
        .watermark(Watermark::default())
        .declared_frames(TOTAL_FRAMES)
        .build()
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn node(label: &str, sublabel: &str, accent: Accent) -> FlowNode {
    FlowNode {
        label: label.to_owned(),
        sublabel: Some(sublabel.to_owned()),
        accent: Some(accent),
    }
}

fn chain(labels: &[&str]) -> Vec<Connection> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| Connection {
            from: i,
            to: i + 1,
            label: Some((*label).to_owned()),
        })
        .collect()
}

fn section_title(number: u32, title: &str, subtitle: &str, accent: Accent) -> SceneKind {
    SceneKind::SectionTitle(SectionTitle {
        number,
        title: title.to_owned(),
        subtitle: Some(subtitle.to_owned()),
        accent,
    })
}

fn concept(heading: &str, body: &str, analogy: &str, icon: &str, accent: Accent) -> SceneKind {
    SceneKind::ConceptExplain(ConceptExplain {
        heading: heading.to_owned(),
        body: body.to_owned(),
        analogy: Some(analogy.to_owned()),
        icon: Some(icon.to_owned()),
        heading_entrance: HeadingEntrance::FadeUp,
        accent,
    })
}

fn metaphor(icon: &str, heading: &str, analogy: &str, accent: Accent) -> SceneKind {
    SceneKind::VisualMetaphor(VisualMetaphor {
        icon: icon.to_owned(),
        heading: heading.to_owned(),
        analogy: analogy.to_owned(),
        accent,
    })
}

fn takeaway(text: &str) -> SceneKind {
    SceneKind::KeyTakeaway(KeyTakeaway {
        heading: "Key Takeaway".to_owned(),
        takeaway: text.to_owned(),
        tone: Tone::Success,
    })
}

fn the_client() -> ExplainerResult<Section> {
    let d = SECTION_1_SCENES;
    SectionBuilder::new("The Client")
        .accent(Accent::Indigo)
        .default_transition(TransitionSpec::fade(T))
        .scene(SceneSpec::new(
            d[0],
            SceneKind::HookQuestion(HookQuestion {
                question: "What actually happens when you click a link?".to_owned(),
                subtext: Some("It's way more complex than you think".to_owned()),
                accent: Accent::Cyan,
            }),
        ))
        .scene(SceneSpec::new(
            d[1],
            SceneKind::TitleIntro(TitleIntro {
                title: "How the Web Actually Works".to_owned(),
                objectives: lines(&[
                    "Understand the client-server model",
                    "Know how DNS translates URLs",
                    "See what happens inside a server",
                    "Learn where your data actually lives",
                ]),
                accent: Accent::Indigo,
            }),
        ))
        .scene(SceneSpec::new(
            d[2],
            section_title(1, "The Client", "Your browser is smarter than you think", Accent::Indigo),
        ))
        .scene(SceneSpec::new(
            d[3],
            concept(
                "Your Browser = The Client",
                "When you type a URL, your browser sends a request to a server somewhere on the internet. It's asking for a specific page.",
                "Think of it like ordering food: you tell the waiter what you want, and they bring it from the kitchen.",
                "\u{1F310}",
                Accent::Cyan,
            ),
        ))
        .scene(SceneSpec::new(
            d[4],
            SceneKind::StepSequence(StepSequence {
                heading: "What Your Browser Does".to_owned(),
                steps: vec![
                    Step {
                        title: "Reads the URL".to_owned(),
                        description: Some("Parses the domain name from the address bar".to_owned()),
                    },
                    Step {
                        title: "Finds the server".to_owned(),
                        description: Some("Uses DNS to get the server's IP address".to_owned()),
                    },
                    Step {
                        title: "Sends the request".to_owned(),
                        description: Some("Asks the server for the page over HTTP".to_owned()),
                    },
                ],
                accent: Accent::Indigo,
            }),
        ))
        .scene(SceneSpec::new(
            d[5],
            metaphor(
                "\u{1F37D}\u{FE0F}",
                "You're the Customer",
                "Every app on your phone is a client. When you scroll Instagram, your phone asks Meta's servers for the next batch of posts.",
                Accent::Amber,
            ),
        ))
        .scene(SceneSpec::new(
            d[6],
            takeaway(
                "The client (your browser or app) sends requests. It never stores the real data; it just displays what the server sends back.",
            ),
        ))
        .build()
}

fn dns_lookup() -> ExplainerResult<Section> {
    let d = SECTION_2_SCENES;
    SectionBuilder::new("DNS Lookup")
        .accent(Accent::Amber)
        .default_transition(TransitionSpec::fade(T))
        .scene(SceneSpec::new(
            d[0],
            section_title(2, "DNS Lookup", "The internet's phone book", Accent::Amber),
        ))
        .scene(SceneSpec::new(
            d[1],
            concept(
                "Names to Numbers",
                "You type google.com, but computers only understand numbers. DNS converts that friendly name into an IP address like 142.250.80.46.",
                "It's like looking up a contact name in your phone: you know the name, DNS knows the number.",
                "\u{1F4D6}",
                Accent::Amber,
            ),
        ))
        .scene(SceneSpec::new(
            d[2],
            SceneKind::DiagramFlow(DiagramFlow {
                title: "How DNS Resolution Works".to_owned(),
                nodes: vec![
                    node("Browser", "Cache check", Accent::Cyan),
                    node("Resolver", "ISP lookup", Accent::Indigo),
                    node("Root", ".com zone", Accent::Violet),
                    node("TLD", "google.com", Accent::Amber),
                    node("Auth", "IP found", Accent::Green),
                ],
                connections: chain(&["query", "ask", "refer", "resolve"]),
                direction: FlowDirection::Horizontal,
            }),
        ))
        .scene(SceneSpec::new(
            d[3],
            SceneKind::StatHighlight(StatHighlight {
                stat: 1.1,
                decimals: 1,
                prefix: String::new(),
                suffix: " trillion".to_owned(),
                label: "DNS queries per day".to_owned(),
                context: Some(
                    "Every link click, every API call, every image load starts with a DNS lookup"
                        .to_owned(),
                ),
                accent: Accent::Amber,
            }),
        ))
        .scene(SceneSpec::new(
            d[4],
            metaphor(
                "\u{1F4F1}",
                "Cached For Speed",
                "Your browser remembers recent lookups so it doesn't ask DNS every single time. Like saving a frequent contact as a favorite.",
                Accent::Green,
            ),
        ))
        .scene(SceneSpec::new(
            d[5],
            takeaway(
                "DNS translates human-readable domain names into machine-readable IP addresses. Without it, you'd need to memorize numbers.",
            ),
        ))
        .build()
}

fn the_server() -> ExplainerResult<Section> {
    let d = SECTION_3_SCENES;
    SectionBuilder::new("The Server")
        .accent(Accent::Indigo)
        .default_transition(TransitionSpec::fade(T))
        .scene(SceneSpec::new(
            d[0],
            section_title(3, "The Server", "Where the magic actually happens", Accent::Indigo),
        ))
        .scene(SceneSpec::new(
            d[1],
            concept(
                "Servers Are Just Computers",
                "A server is a computer that's always on, always connected, and waiting for requests. When one arrives, it processes it and sends back a response.",
                "It's the kitchen in our restaurant, always ready to cook whatever's ordered.",
                "\u{1F5A5}\u{FE0F}",
                Accent::Indigo,
            ),
        ))
        .scene(SceneSpec::new(
            d[2],
            SceneKind::DiagramFlow(DiagramFlow {
                title: "The Request-Response Cycle".to_owned(),
                nodes: vec![
                    node("Request", "GET /page", Accent::Cyan),
                    node("Router", "Match path", Accent::Indigo),
                    node("Logic", "Process", Accent::Violet),
                    node("Response", "Send HTML", Accent::Green),
                ],
                connections: chain(&["URL", "handler", "result"]),
                direction: FlowDirection::Horizontal,
            }),
        ))
        .scene(SceneSpec::new(
            d[3],
            SceneKind::CodeDisplay(CodeDisplay {
                title: "A Simple HTTP Response".to_owned(),
                code: "HTTP/1.1 200 OK\nContent-Type: text/html\n\n<html>\n  <body>Hello World</body>\n</html>"
                    .to_owned(),
                annotations: vec![
                    Annotation {
                        line: 1,
                        text: "Status: 200 means success".to_owned(),
                    },
                    Annotation {
                        line: 2,
                        text: "Tells browser it's HTML".to_owned(),
                    },
                    Annotation {
                        line: 5,
                        text: "The actual page content".to_owned(),
                    },
                ],
                show_line_numbers: true,
                highlight_lines: Vec::new(),
                typewriter: false,
            }),
        ))
        .scene(SceneSpec::new(
            d[4],
            SceneKind::BulletList(BulletList {
                heading: "HTTP Status Codes".to_owned(),
                items: lines(&[
                    "200: OK, here's your page",
                    "301: It moved, follow this link",
                    "404: Page not found",
                    "500: Server broke, not your fault",
                ]),
                style: BulletStyle::Number,
                accent: Accent::Amber,
            }),
        ))
        .scene(SceneSpec::new(
            d[5],
            takeaway(
                "The server receives requests, processes them, and sends back responses. Every website you visit follows this exact pattern.",
            ),
        ))
        .build()
}

fn the_database() -> ExplainerResult<Section> {
    let d = SECTION_4_SCENES;
    SectionBuilder::new("The Database")
        .accent(Accent::Green)
        .default_transition(TransitionSpec::fade(T))
        .scene(SceneSpec::new(
            d[0],
            section_title(4, "The Database", "Where your data actually lives", Accent::Green),
        ))
        .scene(SceneSpec::new(
            d[1],
            concept(
                "Persistent Storage",
                "The server processes requests but doesn't remember anything between them. The database stores all the permanent data: users, posts, orders.",
                "If the server is the kitchen, the database is the pantry. The kitchen pulls ingredients from the pantry for every dish.",
                "\u{1F4BE}",
                Accent::Green,
            ),
        ))
        .scene(SceneSpec::new(
            d[2],
            SceneKind::ComparisonSplit(ComparisonSplit {
                heading: "SQL vs NoSQL".to_owned(),
                left: SplitSide {
                    title: "SQL".to_owned(),
                    items: lines(&[
                        "Structured tables",
                        "Fixed schema",
                        "Great for relations",
                        "PostgreSQL, MySQL",
                    ]),
                    accent: Accent::Cyan,
                },
                right: SplitSide {
                    title: "NoSQL".to_owned(),
                    items: lines(&[
                        "Flexible documents",
                        "Schema-free",
                        "Great for scale",
                        "MongoDB, Firebase",
                    ]),
                    accent: Accent::Violet,
                },
                entrance: SideEntrance::Slide,
            }),
        ))
        .scene(SceneSpec::new(
            d[3],
            SceneKind::WarningCallout(WarningCallout {
                heading: "Never Trust the Client".to_owned(),
                body: "Always validate data on the server before writing to the database. Client-side validation can be bypassed; server-side cannot."
                    .to_owned(),
                severity: Severity::Danger,
            }),
        ))
        .scene(SceneSpec::new(
            d[4],
            metaphor(
                "\u{1F5C4}\u{FE0F}",
                "Your App's Memory",
                "Without a database, every time the server restarts, all data disappears. The database is the long-term memory your app depends on.",
                Accent::Green,
            ),
        ))
        .scene(SceneSpec::new(
            d[5],
            takeaway(
                "Databases store the permanent data. The server reads from and writes to the database on every request that needs data.",
            ),
        ))
        .build()
}

fn full_picture() -> ExplainerResult<Section> {
    let d = SECTION_5_SCENES;
    SectionBuilder::new("The Full Picture")
        .accent(Accent::Violet)
        .default_transition(TransitionSpec::fade(T))
        .scene(
            SceneSpec::new(
                d[0],
                section_title(5, "The Full Picture", "All the pieces working together", Accent::Violet),
            )
            .with_entrance(EntranceStyle::FadeLeft),
        )
        .scene(SceneSpec::new(
            d[1],
            SceneKind::DiagramFlow(DiagramFlow {
                title: "The Complete Request Lifecycle".to_owned(),
                nodes: vec![
                    node("Browser", "Click link", Accent::Cyan),
                    node("DNS", "Resolve IP", Accent::Amber),
                    node("Server", "Process", Accent::Indigo),
                    node("Database", "Query data", Accent::Green),
                    node("Response", "Send HTML", Accent::Violet),
                ],
                connections: chain(&["URL", "IP", "query", "data"]),
                direction: FlowDirection::Horizontal,
            }),
        ))
        .transition(TransitionSpec::slide(Edge::Bottom, SLIDE_UP))
        .scene(SceneSpec::new(
            d[2],
            SceneKind::BulletList(BulletList {
                heading: "What You Now Understand".to_owned(),
                items: lines(&[
                    "Your browser is always the client",
                    "DNS turns names into numbers",
                    "Servers process every request",
                    "Databases store the real data",
                    "It all happens in milliseconds",
                ]),
                style: BulletStyle::Check,
                accent: Accent::Green,
            }),
        ))
        .scene(SceneSpec::new(
            d[3],
            SceneKind::SummaryRecap(SummaryRecap {
                heading: "Quick Recap".to_owned(),
                items: lines(&[
                    "The client (browser) sends requests",
                    "DNS translates URLs to IP addresses",
                    "The server processes and responds",
                    "The database stores persistent data",
                    "This cycle repeats for every page load",
                ]),
                item_entrance: EntranceStyle::ScaleUp,
            }),
        ))
        .scene(SceneSpec::new(
            d[4],
            SceneKind::EndScreen(EndScreen {
                channel: "medevsmaker".to_owned(),
                cta: "Subscribe for more".to_owned(),
                tagline: Some("Tech explained for builders".to_owned()),
                links: Vec::new(),
                show_particles: true,
                accent: Accent::Indigo,
            }),
        ))
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/presets/how_the_web_works.rs"]
mod tests;
