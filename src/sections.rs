//! Per-section HTML fragment renderers.
//!
//! One pure function per content section, from typed input (and the
//! discovered image list for the gallery) to [maud](https://maud.lambda.xyz/)
//! markup. Rendering has no side effects and no I/O — the builders own
//! reading the document and splicing the fragments into the template.
//!
//! Layout rules encoded here:
//! - reveal-animation delays step by 0.1s per sibling card
//! - stat values pick their color class from the declared tag and their
//!   sizing from whether the value is counted
//! - the achievement timeline alternates sides by position parity and
//!   suppresses trailing margins on last items
//! - the gallery splits into a featured first row and a denser rest grid
//! - footer social links render only for recognized platforms

use crate::config::BuildConfig;
use crate::content::{
    AchievementResult, Achievements, Bike, Footer, Hero, Motivation, Platform, ResultBody, Stat,
    SubResult,
};
use maud::{Markup, html};

/// Alt text applied to gallery and motivation photos.
const PHOTO_ALT: &str = "Race photo";

/// Badge logo shown in the footer (lives outside the managed regions).
const FOOTER_LOGO: &str = "logos/badge.svg";

/// Bike spec label whose value gets the blue accent instead of white.
/// The content document is Hungarian; this is its "Color" row.
const COLOR_SPEC_LABEL: &str = "Szín";

/// Reveal delay for the card at `index`: 0.1s, 0.2s, 0.3s, ...
fn reveal_delay(index: usize) -> String {
    format!("transition-delay: {}s", (index + 1) as f64 / 10.0)
}

// ============================================================================
// Hero
// ============================================================================

pub fn render_hero(hero: &Hero) -> Markup {
    html! {
        h1 class="hero-content font-orbitron text-5xl sm:text-7xl md:text-8xl lg:text-9xl font-black tracking-tight leading-none mb-4 neon-text neon-glow-pulse text-white" {
            (hero.name)
        }
        div class="hero-content-delay mb-8 h-8 flex items-center justify-center" {
            span id="typewriter-text" class="typewriter font-mono text-sm sm:text-base md:text-lg text-gray-300 tracking-wider" {
                (hero.subtitle)
            }
        }
        div class="hero-content-delay" {
            span class="inline-flex items-center gap-2 bg-neon-blue/10 border border-neon-blue/30 px-5 py-2 rounded-full text-neon-blue font-mono text-xs tracking-wider" {
                span class="w-2 h-2 bg-neon-green rounded-full animate-pulse" {}
                (hero.team)
            }
        }
        div class="hero-content-delay mt-10 mx-auto max-w-md" {
            div class="hero-image aspect-[3/4] max-h-[420px] mx-auto shadow-2xl shadow-neon-blue/10" {
                img src=(hero.hero_image) alt=(hero.name) loading="eager";
            }
        }
    }
}

// ============================================================================
// Stats
// ============================================================================

pub fn render_stats(stats: &[Stat]) -> Markup {
    html! {
        div class="grid grid-cols-2 md:grid-cols-3 gap-4 sm:gap-6" {
            @for (index, stat) in stats.iter().enumerate() {
                @let size = if stat.data_count.is_some() { "text-4xl sm:text-5xl" } else { "text-xl sm:text-2xl" };
                div class="glass-card p-5 sm:p-7 text-center reveal" style=(reveal_delay(index)) {
                    div class="text-2xl mb-2" { (stat.icon) }
                    div class="text-xs font-mono text-gray-400 tracking-wider uppercase mb-2" { (stat.label) }
                    div class={ "stat-value " (size) " font-bold " (stat.color.value_classes()) }
                        data-count=[stat.data_count] {
                        (stat.value)
                    }
                }
            }
        }
    }
}

// ============================================================================
// Achievements
// ============================================================================

/// Timeline placement: results alternate around the center line by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 { Side::Left } else { Side::Right }
    }
}

pub fn render_achievements(achievements: &Achievements) -> Markup {
    html! {
        div class="text-center mb-12 reveal" {
            p class="text-gray-400 text-sm font-body max-w-2xl mx-auto" {
                (achievements.intro)
            }
        }
        @for (ci, category) in achievements.categories.iter().enumerate() {
            @let last_category = ci + 1 == achievements.categories.len();
            div class=[(!last_category).then_some("mb-16")] {
                div class="flex items-center gap-3 mb-8 reveal" {
                    span class="text-2xl" { (category.icon) }
                    h3 class="font-orbitron text-xl sm:text-2xl font-bold text-white" { (category.name) }
                }
                div class="relative" {
                    div class="timeline-line hidden md:block" {}
                    div class="timeline-line md:hidden" style="left: 20px;" {}
                    @for (ri, result) in category.results.iter().enumerate() {
                        (render_timeline_item(result, Side::for_index(ri), ri + 1 == category.results.len()))
                    }
                }
            }
        }
    }
}

fn render_timeline_item(result: &AchievementResult, side: Side, is_last: bool) -> Markup {
    let margin = if is_last { "" } else { " mb-12 md:mb-16" };
    let border_style = result
        .highlight
        .then_some("border-color: rgba(57, 255, 20, 0.3);");
    let card = html! {
        div class="glass-card p-5 sm:p-6 neon-border" style=[border_style] {
            (render_result_card(result, side))
        }
    };
    html! {
        div class={ "relative flex flex-col md:flex-row md:items-center" (margin) " reveal" } {
            div class="timeline-dot hidden md:block" style="top: 50%;" {}
            div class="timeline-dot md:hidden" style="top: 24px; left: 20px;" {}
            @match side {
                Side::Left => {
                    div class="md:w-1/2 md:pr-12 md:text-right pl-12 md:pl-0" { (card) }
                    div class="md:w-1/2 hidden md:block" {}
                }
                Side::Right => {
                    div class="md:w-1/2 hidden md:block" {}
                    div class="md:w-1/2 md:pl-12 pl-12" { (card) }
                }
            }
        }
    }
}

fn render_result_card(result: &AchievementResult, side: Side) -> Markup {
    let desc = result.description.as_deref().filter(|d| !d.is_empty());
    // Left-side cards are right-aligned on desktop, so their rows justify end.
    let justify = match side {
        Side::Left => " md:justify-end",
        Side::Right => "",
    };
    let body = match &result.body {
        ResultBody::Single {
            medal,
            place,
            place_color,
        } => html! {
            @if let Some(d) = desc {
                p class="text-gray-400 text-xs mb-2" { (d) }
            }
            div class={ "flex items-center gap-2" (justify) } {
                span class="text-2xl" { (medal) }
                span class={ (place_color.as_deref().unwrap_or("text-gray-300")) " font-bold" } { (place) }
            }
        },
        ResultBody::Group { sub_results } => html! {
            @if let Some(d) = desc {
                p class="text-gray-400 text-xs mb-3" { (d) }
            }
            div class="space-y-2" {
                @for sub in sub_results {
                    (render_sub_result(sub, justify))
                }
            }
        },
    };
    html! {
        div class="font-mono text-xs text-neon-green tracking-wider mb-1" { (result.age_group) }
        h3 class="font-orbitron text-base sm:text-lg font-bold text-white mb-1" { (result.title) }
        (body)
    }
}

fn render_sub_result(sub: &SubResult, justify: &str) -> Markup {
    html! {
        @if sub.is_total {
            div class={ "flex items-center gap-2 text-sm border-t border-white/10 pt-2 mt-2" (justify) } {
                span { (sub.medal) }
                span class={ (sub.total_color.as_deref().unwrap_or("text-neon-blue")) " font-bold" } {
                    (sub.event) " – " (sub.place)
                }
            }
        } @else {
            div class={ "flex items-center gap-2 text-sm" (justify) } {
                span { (sub.medal) }
                span class="text-gray-300" {
                    span class="text-white font-medium" { (sub.event) }
                    " – " (sub.place)
                }
            }
        }
    }
}

// ============================================================================
// Gallery
// ============================================================================

/// Gallery fragment for the site builder: a placeholder when no images are
/// discovered, otherwise the shared two-tier grid with the configured source
/// prefix applied to each filename.
pub fn render_gallery(images: &[String], config: &BuildConfig) -> Markup {
    if images.is_empty() {
        return html! {
            p class="text-gray-400 text-center" { "No photos in the gallery yet." }
        };
    }
    let sources: Vec<String> = images
        .iter()
        .map(|name| format!("{}/{}", config.gallery_prefix, name))
        .collect();
    render_photo_grids(&sources, config.first_row_count)
}

/// The shared two-tier gallery layout: the first `first_row_count` sources
/// in a featured single-row grid, the rest in a denser multi-column grid
/// with a fixed reveal offset.
pub fn render_photo_grids(sources: &[String], first_row_count: usize) -> Markup {
    let (first_row, rest) = sources.split_at(first_row_count.min(sources.len()));
    html! {
        div class="photo-grid reveal" {
            @for src in first_row {
                div class="gallery-img" {
                    img src=(src) alt=(PHOTO_ALT) loading="lazy";
                }
            }
        }
        @if !rest.is_empty() {
            div class="grid grid-cols-2 md:grid-cols-4 gap-3 mt-3 reveal" style="transition-delay: 0.2s;" {
                @for src in rest {
                    div class="gallery-img h-48 sm:h-56" {
                        img src=(src) alt=(PHOTO_ALT) loading="lazy";
                    }
                }
            }
        }
    }
}

// ============================================================================
// Bike
// ============================================================================

pub fn render_bike(bike: &Bike) -> Markup {
    html! {
        div class="max-w-lg mx-auto" {
            div class="glass-card p-6 sm:p-8 neon-border reveal-left" {
                div class="flex items-center justify-between mb-6" {
                    h3 class="font-orbitron text-xl sm:text-2xl font-bold text-white" { (bike.name) }
                    (wheel_svg())
                }
                div class="gallery-img h-48 mb-6" {
                    img src=(bike.image) alt=(bike.name) loading="lazy";
                }
                div class="space-y-3" {
                    @for (index, spec) in bike.specs.iter().enumerate() {
                        @let border = if index + 1 == bike.specs.len() { "" } else { " border-b border-white/5" };
                        @let value_class = if spec.label == COLOR_SPEC_LABEL { "text-neon-blue font-medium" } else { "text-white font-medium" };
                        div class={ "flex justify-between items-center py-2" (border) } {
                            span class="font-mono text-xs text-gray-400 uppercase tracking-wider" { (spec.label) }
                            span class=(value_class) { (spec.value) }
                        }
                    }
                }
            }
        }
    }
}

/// Animated wheel ornament next to the bike name.
fn wheel_svg() -> Markup {
    html! {
        svg width="48" height="48" viewBox="0 0 48 48" class="wheel-spin" {
            circle cx="24" cy="24" r="20" stroke="#00D4FF" stroke-width="2" fill="none" {}
            circle cx="24" cy="24" r="16" stroke="#00D4FF" stroke-width="0.5" fill="none" opacity="0.3" {}
            circle cx="24" cy="24" r="3" fill="#00D4FF" {}
            line x1="24" y1="4" x2="24" y2="44" stroke="#00D4FF" stroke-width="0.5" opacity="0.4" {}
            line x1="4" y1="24" x2="44" y2="24" stroke="#00D4FF" stroke-width="0.5" opacity="0.4" {}
            line x1="9.86" y1="9.86" x2="38.14" y2="38.14" stroke="#00D4FF" stroke-width="0.5" opacity="0.4" {}
            line x1="38.14" y1="9.86" x2="9.86" y2="38.14" stroke="#00D4FF" stroke-width="0.5" opacity="0.4" {}
        }
    }
}

// ============================================================================
// Motivation
// ============================================================================

pub fn render_motivation(motivation: &Motivation) -> Markup {
    html! {
        div class="text-center mb-12 reveal" {
            svg class="w-8 h-8 mx-auto mb-4 text-neon-blue/30" fill="currentColor" viewBox="0 0 24 24" {
                path d="M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10H14.017zM0 21v-7.391c0-5.704 3.731-9.57 8.983-10.609L9.978 5.151c-2.432.917-3.995 3.638-3.995 5.849h4v10H0z" {}
            }
            blockquote class="font-orbitron text-2xl sm:text-3xl md:text-4xl font-bold text-white leading-relaxed italic" {
                (motivation.quote)
            }
        }
        div class="grid sm:grid-cols-3 gap-4 sm:gap-6" {
            @for (index, card) in motivation.cards.iter().enumerate() {
                div class="glass-card p-5 text-center reveal" style=(reveal_delay(index)) {
                    div class="text-3xl mb-3" { (card.icon) }
                    p class="text-gray-300 text-sm leading-relaxed" { (card.text) }
                }
            }
        }
        div class="grid grid-cols-2 gap-4 mt-10 reveal" style="transition-delay: 0.3s;" {
            @for photo in &motivation.photos {
                div class="gallery-img h-48 sm:h-64" {
                    img src=(photo) alt=(PHOTO_ALT) loading="lazy";
                }
            }
        }
    }
}

// ============================================================================
// Footer
// ============================================================================

pub fn render_footer(footer: &Footer) -> Markup {
    html! {
        div class="mb-6" {
            img src=(FOOTER_LOGO) alt="Badge logo" class="h-16 mx-auto";
        }
        div class="flex items-center justify-center gap-6 mb-8" {
            @for link in &footer.social_links {
                @match link.platform {
                    Platform::Instagram => { (instagram_link(&link.url)) }
                    Platform::Strava => { (strava_link(&link.url)) }
                    Platform::Other => {}
                }
            }
        }
        p class="text-gray-500 text-sm font-mono cursor-pointer hover:text-gray-300 transition-colors"
            id="footer-easter-egg" role="button" tabindex="0" aria-label="Click for a surprise" {
            (footer.made_with)
        }
        p class="text-gray-600 text-xs font-mono mt-2" {
            "© " (footer.copyright)
        }
    }
}

fn instagram_link(url: &str) -> Markup {
    html! {
        a href=(url) class="group" aria-label="Instagram" {
            div class="w-12 h-12 rounded-full border border-white/10 flex items-center justify-center group-hover:border-neon-blue/50 group-hover:bg-neon-blue/10 transition-all duration-300" {
                svg class="w-5 h-5 text-gray-400 group-hover:text-neon-blue transition-colors" fill="currentColor" viewBox="0 0 24 24" {
                    path d="M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zM12 0C8.741 0 8.333.014 7.053.072 2.695.272.273 2.69.073 7.052.014 8.333 0 8.741 0 12c0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98C8.333 23.986 8.741 24 12 24c3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98C15.668.014 15.259 0 12 0zm0 5.838a6.162 6.162 0 100 12.324 6.162 6.162 0 000-12.324zM12 16a4 4 0 110-8 4 4 0 010 8zm6.406-11.845a1.44 1.44 0 100 2.881 1.44 1.44 0 000-2.881z" {}
                }
            }
        }
    }
}

fn strava_link(url: &str) -> Markup {
    html! {
        a href=(url) class="group" aria-label="Strava" {
            div class="w-12 h-12 rounded-full border border-white/10 flex items-center justify-center group-hover:border-neon-green/50 group-hover:bg-neon-green/10 transition-all duration-300" {
                svg class="w-5 h-5 text-gray-400 group-hover:text-neon-green transition-colors" fill="currentColor" viewBox="0 0 24 24" {
                    path d="M15.387 17.944l-2.089-4.116h-3.065L15.387 24l5.15-10.172h-3.066m-7.008-5.599l2.836 5.598h4.172L10.463 0l-7 13.828h4.169" {}
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
