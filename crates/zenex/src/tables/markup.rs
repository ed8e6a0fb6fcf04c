//! Markup snippet tables.
//!
//! Templates for HTML tags, input-type variants, button variants, and
//! whole-document structures, keyed by abbreviation. Keys are stored
//! lowercase; markup lookups lowercase the abbreviation first. Values
//! carry positional markers (`${1}`, `${1:default}`) that the tab-stop
//! machinery rewrites on every expansion.

use phf::phf_map;

/// HTML tag templates, including `tag:variant` shorthands such as
/// `a:mail` and `meta:vp`.
pub static TAGS: phf::Map<&'static str, &'static str> = phf_map! {
    "html" => "<html lang=\"${1:en}\">${2}</html>",
    "head" => "<head>${1}</head>",
    "body" => "<body>${1}</body>",
    "title" => "<title>${1:Document}</title>",
    "meta" => "<meta ${1}/>",
    "meta:charset" => "<meta charset=\"${1:UTF-8}\"/>",
    "meta:utf" => "<meta charset=\"UTF-8\"/>",
    "meta:vp" => "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>",
    "meta:viewport" => "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>",
    "meta:compat" => "<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\"/>",
    "meta:edge" => "<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\"/>",
    "meta:ie" => "<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\"/>",
    "meta:refresh" => "<meta http-equiv=\"refresh\" content=\"${1:30}\"/>",
    "meta:kw" => "<meta name=\"keywords\" content=\"${1}\"/>",
    "meta:desc" => "<meta name=\"description\" content=\"${1}\"/>",
    "link" => "<link rel=\"${1:stylesheet}\" href=\"${2}\"/>",
    "link:css" => "<link rel=\"stylesheet\" href=\"${1:style.css}\"/>",
    "link:favicon" => "<link rel=\"shortcut icon\" type=\"image/x-icon\" href=\"${1:favicon.ico}\"/>",
    "link:touch" => "<link rel=\"apple-touch-icon\" href=\"${1:favicon.png}\"/>",
    "link:rss" => "<link rel=\"alternate\" type=\"application/rss+xml\" title=\"RSS\" href=\"${1:rss.xml}\"/>",
    "link:atom" => "<link rel=\"alternate\" type=\"application/atom+xml\" title=\"Atom\" href=\"${1:atom.xml}\"/>",
    "link:import" => "<link rel=\"import\" href=\"${1:component.html}\"/>",
    "style" => "<style>${1}</style>",
    "script" => "<script${1}>${2}</script>",
    "script:src" => "<script src=\"${1}\"></script>",
    "base" => "<base href=\"${1}\"/>",
    "header" => "<header>${1}</header>",
    "nav" => "<nav>${1}</nav>",
    "main" => "<main>${1}</main>",
    "section" => "<section>${1}</section>",
    "article" => "<article>${1}</article>",
    "aside" => "<aside>${1}</aside>",
    "footer" => "<footer>${1}</footer>",
    "address" => "<address>${1}</address>",
    "hgroup" => "<hgroup>${1}</hgroup>",
    "div" => "<div>${1}</div>",
    "p" => "<p>${1}</p>",
    "hr" => "<hr/>",
    "pre" => "<pre>${1}</pre>",
    "blockquote" => "<blockquote>${1}</blockquote>",
    "ol" => "<ol>${1}</ol>",
    "ul" => "<ul>${1}</ul>",
    "li" => "<li>${1}</li>",
    "dl" => "<dl>${1}</dl>",
    "dt" => "<dt>${1}</dt>",
    "dd" => "<dd>${1}</dd>",
    "figure" => "<figure>${1}</figure>",
    "figcaption" => "<figcaption>${1}</figcaption>",
    "a" => "<a href=\"${1}\">${2}</a>",
    "a:link" => "<a href=\"http://${1}\">${2}</a>",
    "a:mail" => "<a href=\"mailto:${1}\">${2}</a>",
    "a:tel" => "<a href=\"tel:${1}\">${2}</a>",
    "em" => "<em>${1}</em>",
    "strong" => "<strong>${1}</strong>",
    "small" => "<small>${1}</small>",
    "s" => "<s>${1}</s>",
    "cite" => "<cite>${1}</cite>",
    "q" => "<q>${1}</q>",
    "dfn" => "<dfn>${1}</dfn>",
    "abbr" => "<abbr title=\"${1}\">${2}</abbr>",
    "ruby" => "<ruby>${1}</ruby>",
    "rt" => "<rt>${1}</rt>",
    "rp" => "<rp>${1}</rp>",
    "data" => "<data value=\"${1}\">${2}</data>",
    "time" => "<time datetime=\"${1}\">${2}</time>",
    "code" => "<code>${1}</code>",
    "var" => "<var>${1}</var>",
    "samp" => "<samp>${1}</samp>",
    "kbd" => "<kbd>${1}</kbd>",
    "sub" => "<sub>${1}</sub>",
    "sup" => "<sup>${1}</sup>",
    "i" => "<i>${1}</i>",
    "b" => "<b>${1}</b>",
    "u" => "<u>${1}</u>",
    "mark" => "<mark>${1}</mark>",
    "bdi" => "<bdi>${1}</bdi>",
    "bdo" => "<bdo dir=\"${1:ltr}\">${2}</bdo>",
    "span" => "<span>${1}</span>",
    "br" => "<br/>",
    "wbr" => "<wbr/>",
    "img" => "<img src=\"${1}\" alt=\"${2}\"/>",
    "img:s" => "<img src=\"${1}\" alt=\"${2}\"/>",
    "img:d" => "<img src=\"${1}\" alt=\"${2}\" width=\"${3}\" height=\"${4}\"/>",
    "iframe" => "<iframe src=\"${1}\" frameborder=\"0\">${2}</iframe>",
    "embed" => "<embed src=\"${1}\" type=\"${2}\"/>",
    "object" => "<object data=\"${1}\" type=\"${2}\">${3}</object>",
    "param" => "<param name=\"${1}\" value=\"${2}\"/>",
    "video" => "<video controls>${1}</video>",
    "audio" => "<audio controls>${1}</audio>",
    "source" => "<source src=\"${1}\" type=\"${2}\"/>",
    "track" => "<track src=\"${1}\" kind=\"${2:subtitles}\" srclang=\"${3:en}\" label=\"${4}\"/>",
    "map" => "<map name=\"${1}\">${2}</map>",
    "area" => "<area shape=\"${1:rect}\" coords=\"${2}\" href=\"${3}\" alt=\"${4}\"/>",
    "area:d" => "<area shape=\"default\" href=\"${1}\" alt=\"${2}\"/>",
    "area:c" => "<area shape=\"circle\" coords=\"${1}\" href=\"${2}\" alt=\"${3}\"/>",
    "area:r" => "<area shape=\"rect\" coords=\"${1}\" href=\"${2}\" alt=\"${3}\"/>",
    "area:p" => "<area shape=\"poly\" coords=\"${1}\" href=\"${2}\" alt=\"${3}\"/>",
    "svg" => "<svg xmlns=\"http://www.w3.org/2000/svg\">${1}</svg>",
    "math" => "<math>${1}</math>",
    "canvas" => "<canvas>${1}</canvas>",
    "noscript" => "<noscript>${1}</noscript>",
    "del" => "<del>${1}</del>",
    "ins" => "<ins>${1}</ins>",
    "table" => "<table>${1}</table>",
    "caption" => "<caption>${1}</caption>",
    "colgroup" => "<colgroup>${1}</colgroup>",
    "col" => "<col/>",
    "tbody" => "<tbody>${1}</tbody>",
    "thead" => "<thead>${1}</thead>",
    "tfoot" => "<tfoot>${1}</tfoot>",
    "tr" => "<tr>${1}</tr>",
    "td" => "<td>${1}</td>",
    "th" => "<th>${1}</th>",
    "form" => "<form action=\"${1}\" method=\"${2:post}\">${3}</form>",
    "form:get" => "<form action=\"${1}\" method=\"get\">${2}</form>",
    "form:post" => "<form action=\"${1}\" method=\"post\">${2}</form>",
    "label" => "<label for=\"${1}\">${2}</label>",
    "input" => "<input type=\"${1:text}\" name=\"${2}\" id=\"${3}\"/>",
    "button" => "<button type=\"${1:button}\">${2}</button>",
    "select" => "<select name=\"${1}\" id=\"${2}\">${3}</select>",
    "datalist" => "<datalist id=\"${1}\">${2}</datalist>",
    "optgroup" => "<optgroup label=\"${1}\">${2}</optgroup>",
    "option" => "<option value=\"${1}\">${2}</option>",
    "textarea" => "<textarea name=\"${1}\" id=\"${2}\" cols=\"${3:30}\" rows=\"${4:10}\">${5}</textarea>",
    "keygen" => "<keygen name=\"${1}\" challenge=\"${2}\" keytype=\"${3:rsa}\"/>",
    "output" => "<output for=\"${1}\" form=\"${2}\" name=\"${3}\">${4}</output>",
    "progress" => "<progress value=\"${1}\" max=\"${2:100}\">${3}</progress>",
    "meter" => "<meter value=\"${1}\" min=\"${2:0}\" max=\"${3:100}\">${4}</meter>",
    "fieldset" => "<fieldset>${1}</fieldset>",
    "legend" => "<legend>${1}</legend>",
    "details" => "<details>${1}</details>",
    "summary" => "<summary>${1}</summary>",
    "dialog" => "<dialog>${1}</dialog>",
    "slot" => "<slot name=\"${1}\">${2}</slot>",
    "template" => "<template>${1}</template>",
    "h1" => "<h1>${1}</h1>",
    "h2" => "<h2>${1}</h2>",
    "h3" => "<h3>${1}</h3>",
    "h4" => "<h4>${1}</h4>",
    "h5" => "<h5>${1}</h5>",
    "h6" => "<h6>${1}</h6>",
    "!doctype" => "<!DOCTYPE html>",
    "doc" => r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>${1:Document}</title>
</head>
<body>
    ${2}
</body>
</html>"#,
    "doc4" => r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">
<html lang="en">
<head>
    <meta http-equiv="Content-Type" content="text/html;charset=UTF-8">
    <title>${1:Document}</title>
</head>
<body>
    ${2}
</body>
</html>"#,
    "doc4t" => r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">
<html lang="en">
<head>
    <meta http-equiv="Content-Type" content="text/html;charset=UTF-8">
    <title>${1:Document}</title>
</head>
<body>
    ${2}
</body>
</html>"#,
};

/// `input` element variants (`input:email`, `input:cb`, ...).
pub static INPUT_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "inp" => "<input type=\"${1:text}\" name=\"${2}\" id=\"${3}\"/>",
    "input" => "<input type=\"${1:text}\" name=\"${2}\" id=\"${3}\"/>",
    "input:text" => "<input type=\"text\" name=\"${1}\" id=\"${2}\"/>",
    "input:t" => "<input type=\"text\" name=\"${1}\" id=\"${2}\"/>",
    "input:password" => "<input type=\"password\" name=\"${1}\" id=\"${2}\"/>",
    "input:p" => "<input type=\"password\" name=\"${1}\" id=\"${2}\"/>",
    "input:email" => "<input type=\"email\" name=\"${1}\" id=\"${2}\"/>",
    "input:e" => "<input type=\"email\" name=\"${1}\" id=\"${2}\"/>",
    "input:url" => "<input type=\"url\" name=\"${1}\" id=\"${2}\"/>",
    "input:u" => "<input type=\"url\" name=\"${1}\" id=\"${2}\"/>",
    "input:tel" => "<input type=\"tel\" name=\"${1}\" id=\"${2}\"/>",
    "input:number" => "<input type=\"number\" name=\"${1}\" id=\"${2}\"/>",
    "input:n" => "<input type=\"number\" name=\"${1}\" id=\"${2}\"/>",
    "input:range" => "<input type=\"range\" name=\"${1}\" id=\"${2}\" min=\"${3:0}\" max=\"${4:100}\"/>",
    "input:r" => "<input type=\"range\" name=\"${1}\" id=\"${2}\" min=\"${3:0}\" max=\"${4:100}\"/>",
    "input:date" => "<input type=\"date\" name=\"${1}\" id=\"${2}\"/>",
    "input:d" => "<input type=\"date\" name=\"${1}\" id=\"${2}\"/>",
    "input:time" => "<input type=\"time\" name=\"${1}\" id=\"${2}\"/>",
    "input:datetime" => "<input type=\"datetime-local\" name=\"${1}\" id=\"${2}\"/>",
    "input:dt" => "<input type=\"datetime-local\" name=\"${1}\" id=\"${2}\"/>",
    "input:datetime-local" => "<input type=\"datetime-local\" name=\"${1}\" id=\"${2}\"/>",
    "input:dtl" => "<input type=\"datetime-local\" name=\"${1}\" id=\"${2}\"/>",
    "input:month" => "<input type=\"month\" name=\"${1}\" id=\"${2}\"/>",
    "input:m" => "<input type=\"month\" name=\"${1}\" id=\"${2}\"/>",
    "input:week" => "<input type=\"week\" name=\"${1}\" id=\"${2}\"/>",
    "input:w" => "<input type=\"week\" name=\"${1}\" id=\"${2}\"/>",
    "input:color" => "<input type=\"color\" name=\"${1}\" id=\"${2}\"/>",
    "input:c" => "<input type=\"color\" name=\"${1}\" id=\"${2}\"/>",
    "input:checkbox" => "<input type=\"checkbox\" name=\"${1}\" id=\"${2}\"/>",
    "input:cb" => "<input type=\"checkbox\" name=\"${1}\" id=\"${2}\"/>",
    "input:radio" => "<input type=\"radio\" name=\"${1}\" id=\"${2}\"/>",
    "input:rb" => "<input type=\"radio\" name=\"${1}\" id=\"${2}\"/>",
    "input:file" => "<input type=\"file\" name=\"${1}\" id=\"${2}\"/>",
    "input:f" => "<input type=\"file\" name=\"${1}\" id=\"${2}\"/>",
    "input:submit" => "<input type=\"submit\" value=\"${1:Submit}\"/>",
    "input:s" => "<input type=\"submit\" value=\"${1:Submit}\"/>",
    "input:reset" => "<input type=\"reset\" value=\"${1:Reset}\"/>",
    "input:button" => "<input type=\"button\" value=\"${1:Button}\"/>",
    "input:b" => "<input type=\"button\" value=\"${1:Button}\"/>",
    "input:hidden" => "<input type=\"hidden\" name=\"${1}\" value=\"${2}\"/>",
    "input:h" => "<input type=\"hidden\" name=\"${1}\" value=\"${2}\"/>",
    "input:search" => "<input type=\"search\" name=\"${1}\" id=\"${2}\"/>",
};

/// `button` element variants.
pub static BUTTON_TYPES: phf::Map<&'static str, &'static str> = phf_map! {
    "btn" => "<button type=\"${1:button}\">${2}</button>",
    "btn:b" => "<button type=\"button\">${1}</button>",
    "btn:s" => "<button type=\"submit\">${1}</button>",
    "btn:r" => "<button type=\"reset\">${1}</button>",
    "button:submit" => "<button type=\"submit\">${1}</button>",
    "button:reset" => "<button type=\"reset\">${1}</button>",
    "button:disabled" => "<button type=\"button\" disabled>${1}</button>",
};

/// Whole-document structures. `!` is the HTML5 bootstrap; the `html:*`
/// keys cover the legacy doctypes.
pub static STRUCTURES: phf::Map<&'static str, &'static str> = phf_map! {
    "!" => r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>${1:Document}</title>
</head>
<body>
    ${2}
</body>
</html>"#,
    "html:5" => r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>${1:Document}</title>
</head>
<body>
    ${2}
</body>
</html>"#,
    "html:4t" => r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">
<html lang="en">
<head>
    <meta http-equiv="Content-Type" content="text/html;charset=UTF-8">
    <title>${1:Document}</title>
</head>
<body>
    ${2}
</body>
</html>"#,
    "html:4s" => r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">
<html lang="en">
<head>
    <meta http-equiv="Content-Type" content="text/html;charset=UTF-8">
    <title>${1:Document}</title>
</head>
<body>
    ${2}
</body>
</html>"#,
    "html:xt" => r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en">
<head>
    <meta http-equiv="Content-Type" content="text/html;charset=UTF-8" />
    <title>${1:Document}</title>
</head>
<body>
    ${2}
</body>
</html>"#,
    "html:xs" => r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en">
<head>
    <meta http-equiv="Content-Type" content="text/html;charset=UTF-8" />
    <title>${1:Document}</title>
</head>
<body>
    ${2}
</body>
</html>"#,
    "html:xxs" => r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">
<html xmlns="http://www.w3.org/1999/xhtml" xml:lang="en">
<head>
    <meta http-equiv="Content-Type" content="text/html;charset=UTF-8" />
    <title>${1:Document}</title>
</head>
<body>
    ${2}
</body>
</html>"#,
};
