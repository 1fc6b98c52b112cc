use yew::prelude::*;
use yew_hooks::use_title;

use crate::components::animated_text::{AnimatedHeading, SplitText};
use crate::components::footer::Footer;
use crate::components::scroll_reveal::{ClipReveal, ImageReveal, ScrollReveal};
use crate::data::{posts_in, Post, ALL, BLOG_CATEGORIES, POSTS};
use crate::motion::reveal::ClipEdge;

#[function_component(Blog)]
pub fn blog() -> Html {
    use_title("Blog - MATTR".to_string());
    let category = use_state_eq(|| ALL.to_string());
    let posts = posts_in(&category);
    let featured = POSTS.iter().find(|p| p.featured);

    html! {
        <div class="blog-page">
            <section class="page-hero">
                <h1><SplitText text="Notes from the studio" /></h1>
            </section>

            if let Some(post) = featured {
                <ClipReveal edge={ClipEdge::Up} class="featured-post">
                    <ImageReveal src={format!("/assets/blog/{}.jpg", post.slug())} alt={post.title} />
                    <div>
                        <span class="post-category">{ post.category }</span>
                        <AnimatedHeading>{ post.title }</AnimatedHeading>
                        <p>{ post.excerpt }</p>
                        { post_meta(post) }
                    </div>
                </ClipReveal>
            }

            <div class="filter-row">
                { for BLOG_CATEGORIES.iter().map(|c| {
                    let active = *category == *c;
                    let onclick = {
                        let category = category.clone();
                        Callback::from(move |_: MouseEvent| category.set(c.to_string()))
                    };
                    html! { <button class={classes!("chip", active.then_some("active"))} {onclick}>{ *c }</button> }
                }) }
            </div>

            <section class="post-grid">
                { for posts.iter().enumerate().map(|(i, post)| html! {
                    <ScrollReveal key={post.slug()} delay={(i as u32 % 3) * 100} class="post-card">
                        <a href={format!("/blog#{}", post.slug())}>
                            <span class="post-category">{ post.category }</span>
                            <h3>{ post.title }</h3>
                            <p>{ post.excerpt }</p>
                            { post_meta(post) }
                        </a>
                    </ScrollReveal>
                }) }
            </section>

            <Footer />
        </div>
    }
}

fn post_meta(post: &Post) -> Html {
    html! {
        <p class="post-meta">
            { format!("{} · {} · {} min read", post.author, post.date_label(), post.read_minutes) }
        </p>
    }
}
