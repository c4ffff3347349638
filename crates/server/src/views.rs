//! HTML pages. Plain string rendering; every piece of user text goes through `escape`.

use models::item::{self, Model as Item};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n<nav><a href=\"/\">Home</a> | <a href=\"/about\">About</a></nav>\n{body}</body>\n</html>\n",
        title = escape(title),
    )
}

fn notice_block(notice: Option<&str>) -> String {
    match notice {
        Some(msg) => format!("<p class=\"error\" role=\"alert\">{}</p>\n", escape(msg)),
        None => String::new(),
    }
}

fn item_form(action: &str, submit: &str, title: &str, description: &str) -> String {
    format!(
        "<form action=\"{action}\" method=\"post\">\n<label>Title <input type=\"text\" name=\"title\" maxlength=\"{tmax}\" value=\"{title}\" required></label>\n<label>Description <input type=\"text\" name=\"desc\" maxlength=\"{dmax}\" value=\"{desc}\"></label>\n<button type=\"submit\">{submit}</button>\n</form>\n",
        action = escape(action),
        tmax = item::TITLE_MAX_LEN,
        dmax = item::DESCRIPTION_MAX_LEN,
        title = escape(title),
        desc = escape(description),
        submit = escape(submit),
    )
}

/// Listing page with the create form on top.
pub fn index(items: &[Item], notice: Option<&str>) -> String {
    let mut body = String::from("<h1>Add a todo</h1>\n");
    body.push_str(&notice_block(notice));
    body.push_str(&item_form("/", "Add", "", ""));
    body.push_str("<h2>Your todos</h2>\n");

    if items.is_empty() {
        body.push_str("<p class=\"empty\">No todos yet.</p>\n");
        return layout("My Todo", &body);
    }

    body.push_str("<table>\n<thead><tr><th>#</th><th>Title</th><th>Description</th><th>Created</th><th>Actions</th></tr></thead>\n<tbody>\n");
    for (pos, it) in items.iter().enumerate() {
        body.push_str(&format!(
            "<tr><td>{n}</td><td>{title}</td><td>{desc}</td><td>{created}</td><td><a href=\"/update/{id}\">Update</a> <a href=\"/delete/{id}\">Delete</a></td></tr>\n",
            n = pos + 1,
            title = escape(&it.title),
            desc = escape(&it.description),
            created = it.created_at.format("%Y-%m-%d %H:%M"),
            id = it.id,
        ));
    }
    body.push_str("</tbody>\n</table>\n");
    layout("My Todo", &body)
}

/// Edit form for one item, prefilled with the given values.
pub fn edit(id: i32, title: &str, description: &str, notice: Option<&str>) -> String {
    let mut body = String::from("<h1>Update todo</h1>\n");
    body.push_str(&notice_block(notice));
    body.push_str(&item_form(&format!("/update/{id}"), "Update", title, description));
    layout("Update Todo", &body)
}

pub fn about() -> String {
    layout(
        "About",
        "<h1>About</h1>\n<p>A small personal to-do list. Add items with a title and an optional description, edit them, and delete them when done.</p>\n",
    )
}
