//! The portfolio's apps
//!
//! Everything the page can open lives here: the media players, the contact
//! card, the recycle bin, the hosted tools and the xeno experiments.

use arcade_desktop::{
    AppDescriptor, AppRegistry, DesktopSettings, Placement, Size, WindowConfig, WindowContent,
};

/// Section order of the side panel
pub const CATEGORY_ORDER: [&str; 4] = ["MEDIA", "TOOLS", "SYSTEM", "XENO"];

/// Width of the side panel that centered windows stay clear of
const SIDE_PANEL_WIDTH: f32 = 320.0;

const TOOL_SIZE: Size = Size::new(800.0, 600.0);
const ALBUM_SIZE: Size = Size::new(400.0, 500.0);

struct Album {
    title: &'static str,
    artist: &'static str,
    bandcamp_id: u64,
    slug: &'static str,
}

const ALBUMS: [Album; 8] = [
    Album {
        title: "Opalyn",
        artist: "Faycle",
        bandcamp_id: 2788353006,
        slug: "opalyn",
    },
    Album {
        title: "Kickgun & Dentalcore VOL2",
        artist: "oblinof",
        bandcamp_id: 105379128,
        slug: "kickgun-dentalcore-vol2",
    },
    Album {
        title: "Graphical Interface Trance",
        artist: "Oblinof",
        bandcamp_id: 2659704266,
        slug: "graphical-interface-trance",
    },
    Album {
        title: "edits, tools, & trash",
        artist: "Oblinof",
        bandcamp_id: 2147918188,
        slug: "edits-tools-trash",
    },
    Album {
        title: "Dogma",
        artist: "Aloe Engine",
        bandcamp_id: 193817841,
        slug: "dogma",
    },
    Album {
        title: ",-Dr3ja",
        artist: "Oblinof",
        bandcamp_id: 541149304,
        slug: "dr3ja",
    },
    Album {
        title: "842",
        artist: "Aural Eq",
        bandcamp_id: 1723178745,
        slug: "842",
    },
    Album {
        title: "Wifi Pineal",
        artist: "Oblinof",
        bandcamp_id: 3419546872,
        slug: "wifi-pineal",
    },
];

/// (id, name, icon, category, title, url)
const HOSTED: [(&str, &str, &str, &str, &str, &str); 10] = [
    ("gallery", "Visual Gallery", "🖼", "MEDIA", "VISUAL MODE", "https://artviewer.vercel.app/"),
    ("datafall", "Datafall", "💧", "TOOLS", "DATAFALL.EXE", "https://datafall.vercel.app/"),
    ("paintdelic", "Paintdelic", "🎨", "TOOLS", "PAINTDELIC_V2", "https://paintedelic.vercel.app/"),
    (
        "ambient",
        "Ambient",
        "🔊",
        "TOOLS",
        "AMBIENT PORTABLE",
        "https://conversation-rope-497.app.ohara.ai",
    ),
    ("entity", "Entity", "👾", "TOOLS", "ENTITY COLLAB", "https://entity-collab.vercel.app/"),
    ("wordarp", "WordArp", "🎹", "TOOLS", "WORD ARP CONSOLE", "https://wordarp.vercel.app/"),
    (
        "realism",
        "Realism",
        "👁",
        "XENO",
        "EXTRACTIVIST REALISM",
        "https://extractivist-realism.vercel.app/",
    ),
    ("ravecat", "Ravecat", "🐈", "XENO", "RAVECAT SIMULATION", "https://ravecat-beta.vercel.app/"),
    ("psyballz", "PsyBallz", "🔮", "XENO", "PSYBALLZ", "https://psyballs.vercel.app/"),
    ("sydra", "Sydra", "🧬", "XENO", "SYDRA GENETICS", "https://sydra-byhq.vercel.app/"),
];

const DJ_MIXES_URL: &str = "https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/playlists/soundcloud%253Aplaylists%253A1581868891&color=%2300ffff&auto_play=false&hide_related=false&show_comments=true&show_user=true&show_reposts=false&show_teaser=true";

const CONTACT_CARD: &str = r#"<div class="profile-layout">
    <div class="profile-card">
        <h2>OBLINOF</h2>
        <div class="stat-block">
            <p>CLASS: MULTIMEDIA ARTIST</p>
            <p>RANK: SSS</p>
            <p>LOCATION: GRID_NODE_07</p>
        </div>
        <p>&gt;&gt; Crafting audiovisual experiences since [2007].</p>
        <div class="link-box">
            <a href="mailto:oblinof@gmail.com" target="_blank">EMAIL TRANSMISSION</a>
            <a href="https://linktr.ee/oblinof" target="_blank">NEURAL LINKTREE</a>
        </div>
    </div>
</div>"#;

/// Settings for the arcade page: centered windows beside the side panel
/// under a tall header
pub fn settings() -> DesktopSettings {
    let mut settings = DesktopSettings {
        top_bar_height: 80.0,
        bottom_bar_height: 0.0,
        ..Default::default()
    };
    settings.policy.placement = Placement::Centered {
        reserved_right: SIDE_PANEL_WIDTH,
    };
    settings
}

/// Every app the page can open
pub fn registry() -> AppRegistry {
    let mut apps = AppRegistry::new();

    apps.register(AppDescriptor::new(
        "music",
        "Music Select",
        "♫",
        "MEDIA",
        app_window("SELECT MUSIC", WindowContent::Markup(music_grid()), TOOL_SIZE),
    ));
    apps.register(
        AppDescriptor::new(
            "dj_obli",
            "DJ OBLI",
            "♫",
            "MEDIA",
            app_window("DJ OBLI // MIXES", embed(DJ_MIXES_URL), TOOL_SIZE),
        )
        .unlisted(),
    );
    for (index, album) in ALBUMS.iter().enumerate() {
        apps.register(
            AppDescriptor::new(
                &album_id(index),
                album.title,
                "💿",
                "MEDIA",
                WindowConfig {
                    resizable: false,
                    ..app_window(
                        &format!("AUDIO: {}", album.title),
                        album_player(album),
                        ALBUM_SIZE,
                    )
                },
            )
            .unlisted(),
        );
    }

    for (id, name, icon, category, title, url) in HOSTED {
        apps.register(AppDescriptor::new(
            id,
            name,
            icon,
            category,
            app_window(title, embed(url), TOOL_SIZE),
        ));
    }

    apps.register(
        AppDescriptor::new(
            "ballsynth",
            "Ball Synth",
            "●",
            "TOOLS",
            app_window("BALL SYNTH", WindowContent::default(), TOOL_SIZE),
        )
        .fetched_from("fragments/ball-synth.html"),
    );

    apps.register(AppDescriptor::new(
        "contact",
        "Player Info",
        "✉",
        "SYSTEM",
        app_window(
            "PLAYER INFO",
            WindowContent::Markup(CONTACT_CARD.to_string()),
            Size::new(500.0, 450.0),
        ),
    ));
    apps.register(AppDescriptor::new(
        "trash",
        "Recycle Bin",
        "🗑",
        "SYSTEM",
        app_window(
            "RECYCLE",
            WindowContent::Markup(
                r#"<div class="empty-state">NO GARBAGE DATA FOUND</div>"#.to_string(),
            ),
            Size::new(300.0, 200.0),
        ),
    ));

    apps
}

fn app_window(title: &str, content: WindowContent, size: Size) -> WindowConfig {
    WindowConfig {
        title: title.to_string(),
        content,
        size,
        resizable: true,
        allow_fullscreen: true,
        ..Default::default()
    }
}

fn embed(url: &str) -> WindowContent {
    WindowContent::Markup(format!(
        r#"<iframe src="{}" style="width:100%; height:100%; border:0;"></iframe>"#,
        url
    ))
}

fn album_id(index: usize) -> String {
    format!("album_{}", index)
}

fn album_player(album: &Album) -> WindowContent {
    WindowContent::Markup(format!(
        r#"<iframe style="border: 0; width: 100%; height: 100%;" src="https://bandcamp.com/EmbeddedPlayer/album={}/size=large/bgcol=000000/linkcol=00ffff/tracklist=false/transparent=true/" seamless><a href="https://environment-texture.bandcamp.com/album/{}">{} by {}</a></iframe>"#,
        album.bandcamp_id,
        album.slug,
        escape_text(album.title),
        escape_text(album.artist)
    ))
}

/// Album grid; the page launches `data-launch` targets on click
fn music_grid() -> String {
    let mut html = String::from(
        r#"<div class="arcade-grid"><div class="arcade-item special-item" data-launch="dj_obli"><div class="item-badge">HOT</div><div class="item-info"><div class="item-title">DJ OBLI</div><div class="item-sub">Liminal Mixes</div></div></div>"#,
    );
    for (index, album) in ALBUMS.iter().enumerate() {
        html.push_str(&format!(
            r#"<div class="arcade-item" data-launch="{}"><div class="item-badge">CD</div><div class="item-info"><div class="item-title">{}</div><div class="item-sub">{}</div></div></div>"#,
            album_id(index),
            escape_text(album.title),
            escape_text(album.artist)
        ));
    }
    html.push_str("</div>");
    html
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
