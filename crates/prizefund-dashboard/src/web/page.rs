//! Dashboard page rendering.
//!
//! Produces one self-contained HTML document: summary cards, the scheme's
//! purpose and formula, the editable (or read-only) marks, both reward
//! tables, and the totals check. Every configurable string is escaped.

use std::fmt::Write;

use prizefund_core::reward::{AnnualFund, Rank, RewardTable, ScoreSet};

use crate::config::SiteSection;
use crate::session::SessionMarks;

/// Everything the page needs for one render.
pub struct DashboardView<'a> {
    pub site: &'a SiteSection,
    pub fund: &'a AnnualFund,
    pub marks: SessionMarks,
    pub max_score: u64,
    pub public: &'a RewardTable,
    pub internal: &'a RewardTable,
}

struct PoolBlock<'a> {
    title: &'static str,
    table_title: &'static str,
    /// Label prefix shown to users ("Public").
    label: &'static str,
    /// Form field prefix ("public").
    field: &'static str,
    pool: u64,
    scores: ScoreSet,
    table: &'a RewardTable,
}

const STYLE: &str = r#"
html, body { margin: 0; padding: 0; }
body { background: linear-gradient(135deg, #fdfbfb 0%, #ebedee 100%); font-family: 'Segoe UI', sans-serif; }
main { max-width: 1200px; margin: 0 auto; padding: 24px; }
.hero-title { text-align: center; font-size: 44px; font-weight: 900; color: #2c3e50; margin-bottom: -5px; }
.hero-subtitle { text-align: center; font-size: 18px; color: #5c6b7a; margin-bottom: 28px; }
.grid { display: grid; gap: 16px; }
.cols-2 { grid-template-columns: 1fr 1fr; }
.cols-3 { grid-template-columns: 1fr 1fr 1fr; }
.card { background: white; padding: 22px; border-radius: 18px; border: 1px solid #e2e8f0; box-shadow: 0 6px 18px rgba(0,0,0,0.08); }
.card-title { font-size: 20px; font-weight: 800; color: #1f2d3d; }
.card-desc { font-size: 14px; color: #576574; margin-top: 6px; }
.section-title { font-size: 26px; font-weight: 800; margin-top: 30px; margin-bottom: 10px; color: #2c3e50; }
.content-card { background: white; padding: 22px; border-radius: 16px; border: 1px solid #e2e8f0; box-shadow: 0 4px 14px rgba(0,0,0,0.06); margin-bottom: 12px; }
.marks-wrap { display: grid; grid-template-columns: 1fr; gap: 12px; margin-top: 8px; }
.mark-card { border: 1px solid #e2e8f0; border-radius: 14px; padding: 14px; background: #ffffff; box-shadow: 0 2px 10px rgba(0,0,0,0.04); }
.mark-label { font-size: 12px; color: #6b7b8b; margin-bottom: 4px; }
.mark-value { font-size: 22px; font-weight: 900; color: #1f2d3d; }
table { width: 100%; border-collapse: collapse; border-radius: 14px; overflow: hidden; border: 1px solid #e2e8f0; background: white; }
th, td { padding: 10px 14px; text-align: left; border-bottom: 1px solid #eef2f7; }
.mismatch { color: #c0392b; }
footer { text-align: center; color: #7f8c8d; font-size: 14px; padding-top: 40px; }
"#;

/// Minimal HTML escaping for text and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Group digits in threes: `9000` -> `9,000`.
pub fn format_amount(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn render(view: &DashboardView<'_>) -> String {
    let fund = view.fund;
    let title = escape_html(&view.site.title);
    let subtitle = escape_html(&view.site.subtitle);

    let blocks = [
        PoolBlock {
            title: "🌍 Public Test Winners",
            table_title: "🌍 Public Test Reward Table",
            label: "Public",
            field: "public",
            pool: fund.public_pool,
            scores: view.marks.public,
            table: view.public,
        },
        PoolBlock {
            title: "🏫 Internal Test Winners",
            table_title: "🏫 Internal Test Reward Table",
            label: "Internal",
            field: "internal",
            pool: fund.internal_pool,
            scores: view.marks.internal,
            table: view.internal,
        },
    ];

    let mut out = String::with_capacity(16 * 1024);
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n"
    );

    let _ = writeln!(out, "<div class=\"hero-title\">🎓 {title}</div>");
    let _ = writeln!(out, "<div class=\"hero-subtitle\">{subtitle}</div>");

    render_summary(&mut out, fund);
    render_purpose(&mut out, fund);
    render_formula(&mut out, fund);
    render_marks(&mut out, view, &blocks);
    render_tables(&mut out, &blocks);
    render_totals(&mut out, fund, view.public, view.internal);

    let _ = write!(
        out,
        "<footer>© 2025 • Designed &amp; Developed by <b>RV Developers</b></footer>\n\
         </main>\n</body>\n</html>\n"
    );
    out
}

fn render_summary(out: &mut String, fund: &AnnualFund) {
    let _ = write!(
        out,
        "<div class=\"grid cols-3\">\n\
         <div class=\"card\"><div class=\"card-title\">🏦 Principal Amount</div>\
         <h3>₹{principal}</h3>\
         <p class=\"card-desc\">Permanently deposited in the school’s bank account.</p></div>\n\
         <div class=\"card\"><div class=\"card-title\">📉 Interest Rate</div>\
         <h3>{rate} per year</h3>\
         <p class=\"card-desc\">Revised yearly bank interest used for rewards.</p></div>\n\
         <div class=\"card\"><div class=\"card-title\">💰 Annual Reward Fund</div>\
         <h3>₹{total}</h3>\
         <p class=\"card-desc\">Split into two tests (₹{public} + ₹{internal}).</p></div>\n\
         </div>\n",
        principal = format_amount(fund.principal),
        rate = fund.interest_rate,
        total = format_amount(fund.total),
        public = format_amount(fund.public_pool),
        internal = format_amount(fund.internal_pool),
    );
}

fn render_purpose(out: &mut String, fund: &AnnualFund) {
    let _ = write!(
        out,
        "<div class=\"section-title\">🎯 Purpose of the Reward Scheme</div>\n\
         <div class=\"content-card\">\
         To encourage academic excellence, the school created a permanent education fund from which \
         the annual interest is awarded to the top performers every year.\
         <ul>\
         <li><b>Principal</b> remains untouched for life.</li>\
         <li><b>Only yearly interest</b> is used for rewards.</li>\
         <li><b>Split is fixed:</b> {public} Public Test + {internal} Internal Test.</li>\
         <li>Transparent, fair, and proportional reward system.</li>\
         </ul></div>\n",
        public = fund.public_share,
        internal = fund.internal_share(),
    );
}

fn render_formula(out: &mut String, fund: &AnnualFund) {
    let total = format_amount(fund.total);
    let _ = write!(
        out,
        "<div class=\"section-title\">📐 Reward Calculation Formula</div>\n\
         <div class=\"content-card\">\
         Let:<br>\
         • <b>M1, M2, M3</b> = Marks of 1st, 2nd, 3rd rank<br>\
         • <b>Total = M1 + M2 + M3</b><br>\
         • <b>Pool = Test Pool Amount</b><br><br>\
         <b>Formulas:</b><br>\
         • Prize 1 = Pool × (M1 / Total)<br>\
         • Prize 2 = Pool × (M2 / Total)<br>\
         • Prize 3 = Pool − Prize 1 − Prize 2 (absorbs rounding)\
         <hr style=\"border:none;border-top:1px solid #eef2f7;margin:16px 0;\">\
         <b>Split of Annual Fund (Fixed):</b><br><br>\
         🌍 <b>Public Pool (₹)</b> = {total} × {public_share} = <b>₹{public}</b><br>\
         🏫 <b>Internal Pool (₹)</b> = {total} × {internal_share} = <b>₹{internal}</b><br><br>\
         <b>Total (₹)</b> = <b>₹{total}</b></div>\n",
        public_share = fund.public_share,
        internal_share = fund.internal_share(),
        public = format_amount(fund.public_pool),
        internal = format_amount(fund.internal_pool),
    );
}

fn render_marks(out: &mut String, view: &DashboardView<'_>, blocks: &[PoolBlock<'_>]) {
    let editing = view.marks.editing;
    let checked = if editing { " checked" } else { "" };

    let _ = write!(
        out,
        "<div class=\"section-title\">🧮 Enter Winner Marks</div>\n\
         <div class=\"grid cols-2\">\
         <form class=\"content-card\" method=\"post\" action=\"/editing\">\
         <label><input type=\"checkbox\" name=\"enabled\"{checked} onchange=\"this.form.submit()\"> Enable Editing</label>\
         <noscript><button type=\"submit\">Apply</button></noscript></form>\
         <div class=\"content-card\"><b>Only the marks are editable.</b> \
         Principal, interest rate, annual fund, and {public}/{internal} split are fixed.</div>\
         </div>\n",
        public = view.fund.public_share,
        internal = view.fund.internal_share(),
    );

    if editing {
        let _ = writeln!(out, "<form method=\"post\" action=\"/marks\">");
    }
    let _ = writeln!(out, "<div class=\"grid cols-2\">");
    for b in blocks {
        let _ = write!(
            out,
            "<div><div class=\"content-card\"><h4 style=\"margin:0;\">{} (Pool = ₹{})</h4></div>",
            b.title,
            format_amount(b.pool)
        );
        if editing {
            render_mark_inputs(out, b, view.max_score);
        } else {
            render_mark_cards(out, b);
        }
        let _ = writeln!(out, "</div>");
    }
    let _ = writeln!(out, "</div>");
    if editing {
        let _ = writeln!(out, "<button type=\"submit\">Save Marks</button>\n</form>");
    }
}

fn render_mark_inputs(out: &mut String, b: &PoolBlock<'_>, max_score: u64) {
    let _ = write!(out, "<div class=\"marks-wrap\">");
    for (i, (rank, score)) in Rank::ALL.iter().zip(b.scores.as_array()).enumerate() {
        let _ = write!(
            out,
            "<label class=\"mark-card\"><div class=\"mark-label\">{} - {} Rank Marks</div>\
             <input type=\"number\" name=\"{}_m{}\" min=\"0\" max=\"{max_score}\" step=\"1\" value=\"{score}\" required></label>",
            b.label,
            rank.ordinal(),
            b.field,
            i + 1,
        );
    }
    let _ = write!(out, "</div>");
}

fn render_mark_cards(out: &mut String, b: &PoolBlock<'_>) {
    let _ = write!(out, "<div class=\"marks-wrap\">");
    for (rank, score) in Rank::ALL.iter().zip(b.scores.as_array()) {
        let _ = write!(
            out,
            "<div class=\"mark-card\"><div class=\"mark-label\">{} - {} Rank Marks</div>\
             <div class=\"mark-value\">{score}</div></div>",
            b.label,
            rank.ordinal(),
        );
    }
    let _ = write!(out, "</div>");
}

fn render_tables(out: &mut String, blocks: &[PoolBlock<'_>]) {
    let _ = writeln!(
        out,
        "<div class=\"section-title\">🏆 Reward Distribution Tables</div>\n<div class=\"grid cols-2\">"
    );
    for b in blocks {
        let _ = write!(
            out,
            "<div><div class=\"content-card\"><b>{}</b></div>\
             <table><thead><tr><th>Rank</th><th>Marks</th><th>Reward (₹)</th></tr></thead><tbody>",
            b.table_title
        );
        for row in &b.table.rows {
            let _ = write!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                row.label,
                row.score,
                format_amount(row.reward)
            );
        }
        let _ = writeln!(out, "</tbody></table></div>");
    }
    let _ = writeln!(out, "</div>");
}

fn render_totals(out: &mut String, fund: &AnnualFund, public: &RewardTable, internal: &RewardTable) {
    let public_total = public.total();
    let internal_total = internal.total();
    let grand = public_total + internal_total;

    let mark = |ok: bool| if ok { "" } else { " class=\"mismatch\"" };

    let _ = write!(
        out,
        "<div class=\"content-card\" id=\"totals\"><b>Pool Totals Check:</b><br><br>\
         🌍 Public Total = <b{pm}>₹{pt}</b> (Expected ₹{pe})<br>\
         🏫 Internal Total = <b{im}>₹{it}</b> (Expected ₹{ie})<br>\
         <hr style=\"border:none;border-top:1px solid #eef2f7;margin:16px 0;\">\
         <b{gm}>Grand Total = ₹{gt}</b> (Expected ₹{ge})</div>\n",
        pm = mark(public.is_balanced()),
        pt = format_amount(public_total),
        pe = format_amount(fund.public_pool),
        im = mark(internal.is_balanced()),
        it = format_amount(internal_total),
        ie = format_amount(fund.internal_pool),
        gm = mark(grand == fund.total),
        gt = format_amount(grand),
        ge = format_amount(fund.total),
    );
}
