use std::collections::HashSet;

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::animated_text::{AnimatedHeading, SplitText};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::{ImageReveal, ScrollReveal};
use crate::data::{filter_gallery, GalleryItem, ALL, GALLERY, GALLERY_CATEGORIES};
use crate::motion::reveal::Direction;

/// Tweet intent for an image, with the title url-encoded.
fn share_link(item: &GalleryItem) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}",
        urlencoding::encode(&format!("\"{}\" by {} on MATTR", item.title, item.author))
    )
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    use_title("Gallery - MATTR".to_string());
    let category = use_state_eq(|| ALL.to_string());
    let query = use_state_eq(String::new);
    let liked = use_state(HashSet::<u32>::new);
    let selected = use_state_eq(|| None::<u32>);

    let items = filter_gallery(&category, &query);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let toggle_like = {
        let liked = liked.clone();
        Callback::from(move |id: u32| {
            let mut next = (*liked).clone();
            if !next.remove(&id) {
                next.insert(id);
            }
            liked.set(next);
        })
    };

    let close_lightbox = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let lightbox = (*selected)
        .and_then(|id| GALLERY.iter().find(|item| item.id == id))
        .map(|item| {
            html! {
                <div class="lightbox" role="dialog" aria-modal="true" onclick={close_lightbox.clone()}>
                    <figure class="lightbox-frame" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <img src={item.image} alt={item.title} />
                        <figcaption>
                            <h3>{ item.title }</h3>
                            <p>{ format!("by {}", item.author) }</p>
                            <a href={share_link(item)} target="_blank" rel="noopener noreferrer">{"Share"}</a>
                        </figcaption>
                        <button class="lightbox-close" aria-label="Close" onclick={close_lightbox.clone()}>{"×"}</button>
                    </figure>
                </div>
            }
        });

    html! {
        <div class="gallery-page">
            <section class="page-hero">
                <h1><SplitText text="Community gallery" /></h1>
                <ScrollReveal delay={300}>
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search by title or creator"
                        value={(*query).clone()}
                        {oninput}
                    />
                </ScrollReveal>
                <ScrollReveal delay={450} class="filter-row">
                    { for GALLERY_CATEGORIES.iter().map(|c| {
                        let active = *category == *c;
                        let onclick = {
                            let category = category.clone();
                            Callback::from(move |_: MouseEvent| category.set(c.to_string()))
                        };
                        html! {
                            <button class={classes!("chip", active.then_some("active"))} {onclick}>{ *c }</button>
                        }
                    }) }
                </ScrollReveal>
            </section>

            <section class="gallery-grid">
                if items.is_empty() {
                    <ScrollReveal direction={Direction::Blur} class="empty-state">
                        <AnimatedHeading tag="h3">{"Nothing matches that search"}</AnimatedHeading>
                    </ScrollReveal>
                }
                { for items.iter().enumerate().map(|(i, item)| {
                    let id = item.id;
                    let is_liked = liked.contains(&id);
                    let likes = item.likes + u32::from(is_liked);
                    let open = {
                        let selected = selected.clone();
                        Callback::from(move |_: MouseEvent| selected.set(Some(id)))
                    };
                    let like = {
                        let toggle_like = toggle_like.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.stop_propagation();
                            toggle_like.emit(id);
                        })
                    };
                    html! {
                        <ScrollReveal key={id} delay={(i as u32 % 4) * 80} class="gallery-card">
                            <div class="gallery-card-inner" onclick={open}>
                                <ImageReveal src={item.image} alt={item.title} />
                                <div class="gallery-meta">
                                    <span>{ item.title }</span>
                                    <button
                                        class={classes!("like-button", is_liked.then_some("liked"))}
                                        aria-pressed={is_liked.to_string()}
                                        onclick={like}
                                    >
                                        { format!("♥ {likes}") }
                                    </button>
                                </div>
                            </div>
                        </ScrollReveal>
                    }
                }) }
            </section>

            { lightbox.unwrap_or_default() }

            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_link_encodes_title() {
        let link = share_link(&GALLERY[0]);
        assert!(link.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(link.contains("%22Ethereal%20forest%20spirit%22%20by%20Lena%20Park"));
        assert!(!link.contains(' '));
    }
}
