use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="container">
			<h1>"Nothing here"</h1>
			<p>
				<a href="/">"Back to the grid"</a>
			</p>
		</div>
	}
}
