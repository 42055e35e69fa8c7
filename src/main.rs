use astral_planning_ui::board::App;

fn main() {
    dioxus::launch(App);
}
