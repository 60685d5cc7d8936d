//! ヘッダーコンポーネント（ロゴ）

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <svg width="52" height="50" viewBox="0 0 52 50" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path
                    d="M44.2451 6.51163C24.3381 14.1395 20.1365 37.7519 20.5241 48.6047C21.2218 44.1085 24.2451 36.0499 30.9894 33.2558C47.2684 26.5116 50.9892 9.68992 51.9193 0C19.5472 1.67442 17.8108 21.3178 20.9891 30.9302C26.9426 13.814 38.9737 7.51938 44.2451 6.51163Z"
                    fill="url(#leaf-gradient-upper)"
                />
                <path
                    d="M5.40796 22.5581C17.1289 30.9302 19.9041 44.3411 19.8266 50C18.6638 43.4884 14.0665 40.9302 5.64023 34.4186C0.524202 30.4651 -0.250954 20.8527 0.0591239 16.2791C0.446721 16.8992 2.80331 18.6512 9.12889 20.6977C19.5475 23.8605 20.1366 34.1085 19.1289 38.8372C16.8963 29.5349 9.05137 24.1085 5.40796 22.5581Z"
                    fill="url(#leaf-gradient-lower)"
                />
                <defs>
                    <linearGradient id="leaf-gradient-upper" x1="25.9597" y1="0" x2="25.9597" y2="50" gradientUnits="userSpaceOnUse">
                        <stop stop-color="#218600" />
                        <stop offset="1" />
                    </linearGradient>
                    <linearGradient id="leaf-gradient-lower" x1="25.9597" y1="0" x2="25.9597" y2="50" gradientUnits="userSpaceOnUse">
                        <stop stop-color="#218600" />
                        <stop offset="1" />
                    </linearGradient>
                </defs>
            </svg>
        </header>
    }
}
