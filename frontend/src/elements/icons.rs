use dominator::{svg, Dom};

fn icon(view_box: &str, path: &str) -> Dom {
    svg!("svg", {
        .attr("viewBox", view_box)
        .attr("fill", "none")
        .attr("stroke", "currentColor")
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .class("icon")
        .children([
            svg!("path", {
                .attr("d", path)
            })
        ])
    })
}

pub fn icon_edit() -> Dom {
    icon("0 0 24 24", "M15.232 5.232l3.536 3.536m-2.036-5.036a2.5 2.5 0 113.536 3.536L6.5 21.036H3v-3.5L14.732 3.732z")
}

pub fn icon_note() -> Dom {
    icon("0 0 24 24", "M9 5H7a2 2 0 00-2 2v12a2 2 0 002 2h10a2 2 0 002-2V7a2 2 0 00-2-2h-2M9 5a2 2 0 002 2h2a2 2 0 002-2M9 5a2 2 0 012-2h2a2 2 0 012 2")
}

pub fn icon_trash() -> Dom {
    icon("0 0 24 24", "M19 7l-.867 12.142A2 2 0 0116.138 21H7.862a2 2 0 01-1.995-1.858L5 7m5 4v6m4-6v6m1-10V4a1 1 0 00-1-1h-4a1 1 0 00-1 1v3M4 7h16")
}

pub fn icon_check() -> Dom {
    icon("0 0 24 24", "M5 13l4 4L19 7")
}

pub fn icon_close() -> Dom {
    icon("0 0 24 24", "M6 18L18 6M6 6l12 12")
}

pub fn icon_chevron_down() -> Dom {
    icon("0 0 24 24", "M19 9l-7 7-7-7")
}
