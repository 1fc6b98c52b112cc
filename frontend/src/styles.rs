//! Site-wide keyframes and the utility classes the motion components lean on.

use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

#[function_component(GlobalStyles)]
pub fn global_styles() -> Html {
    html! {
        <Global css={css!(r#"
            @keyframes marquee {
                from { transform: translateX(0); }
                to { transform: translateX(-50%); }
            }
            @keyframes fade-up {
                from { opacity: 0; transform: translateY(20px); }
                to { opacity: 1; transform: none; }
            }
            @keyframes pulse {
                0%, 100% { opacity: 1; }
                50% { opacity: 0.4; }
            }
            @keyframes caret-blink {
                0%, 49% { opacity: 1; }
                50%, 100% { opacity: 0; }
            }

            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                background: #0a0a0a;
                color: #f5f5f5;
                font-family: "Inter", system-ui, sans-serif;
                -webkit-font-smoothing: antialiased;
            }

            .overflow-hidden { overflow: hidden; }
            .inline-block { display: inline-block; }
            .relative { position: relative; }
            .cover { width: 100%; height: 100%; object-fit: cover; display: block; }
            .word-gap { margin-right: 0.25em; }
            .stack-sm { display: flex; flex-direction: column; gap: 0.25rem; }
            .mono { font-family: "JetBrains Mono", ui-monospace, monospace; }
            .tabular-nums { font-variant-numeric: tabular-nums; }

            .type-caret {
                display: inline-block;
                width: 2px;
                height: 1em;
                margin-left: 2px;
                vertical-align: -0.1em;
                background: currentColor;
                animation: caret-blink 1s step-end infinite;
            }

            .highlight { position: relative; display: inline-block; }
            .highlight-bar {
                position: absolute;
                left: 0;
                right: 0;
                bottom: 0.1em;
                height: 0.35em;
                background: #c6ff3d;
                opacity: 0.6;
                transform-origin: left center;
            }

            .marquee-track { display: flex; width: max-content; }
            .marquee-group { display: flex; flex-shrink: 0; gap: 3rem; padding-right: 3rem; }

            .hscroll-track { display: flex; gap: 1.5rem; width: max-content; will-change: transform; }

            .magnetic-inner { display: inline-block; will-change: transform; }

            .cursor-follower {
                position: fixed;
                top: 0;
                left: 0;
                pointer-events: none;
                z-index: 9999;
                mix-blend-mode: difference;
            }
            .cursor-dot { border-radius: 50%; background: #fff; }

            .top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 100;
                transition: background 0.3s ease, backdrop-filter 0.3s ease;
            }
            .top-nav.scrolled {
                background: rgba(10, 10, 10, 0.8);
                backdrop-filter: blur(12px);
            }
            .nav-progress {
                position: absolute;
                left: 0;
                right: 0;
                bottom: 0;
                height: 2px;
                background: #c6ff3d;
                transform-origin: left center;
            }

            .render-placeholder { animation: pulse 1.6s ease-in-out infinite; }
            .auth-success, .form-success { animation: fade-up 0.6s ease-out both; }
        "#)} />
    }
}
