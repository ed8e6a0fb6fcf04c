//! Style property tables.
//!
//! CSS property and value shortcuts keyed by abbreviation. Plain
//! shortcuts (`w`, `m`, `bd`) leave a `$1` value position for the
//! shorthand matchers or the tab-stop normalizer to fill; `key:variant`
//! shortcuts (`pos:a`, `d:f`) expand to a complete declaration.

use phf::phf_map;

/// Style property and value-shortcut templates.
pub static PROPERTIES: phf::Map<&'static str, &'static str> = phf_map! {
    "pos" => "position: $1;",
    "pos:s" => "position: static;",
    "pos:a" => "position: absolute;",
    "pos:r" => "position: relative;",
    "pos:f" => "position: fixed;",
    "pos:st" => "position: sticky;",
    "t" => "top: $1;",
    "r" => "right: $1;",
    "b" => "bottom: $1;",
    "l" => "left: $1;",
    "z" => "z-index: $1;",
    "d" => "display: $1;",
    "d:n" => "display: none;",
    "d:b" => "display: block;",
    "d:i" => "display: inline;",
    "d:ib" => "display: inline-block;",
    "d:f" => "display: flex;",
    "d:if" => "display: inline-flex;",
    "d:g" => "display: grid;",
    "d:ig" => "display: inline-grid;",
    "d:t" => "display: table;",
    "d:tc" => "display: table-cell;",
    "d:tr" => "display: table-row;",
    "v" => "visibility: $1;",
    "v:v" => "visibility: visible;",
    "v:h" => "visibility: hidden;",
    "v:c" => "visibility: collapse;",
    "ov" => "overflow: $1;",
    "ov:v" => "overflow: visible;",
    "ov:h" => "overflow: hidden;",
    "ov:s" => "overflow: scroll;",
    "ov:a" => "overflow: auto;",
    "ovx" => "overflow-x: $1;",
    "ovy" => "overflow-y: $1;",
    "fl" => "float: $1;",
    "fl:n" => "float: none;",
    "fl:l" => "float: left;",
    "fl:r" => "float: right;",
    "cl" => "clear: $1;",
    "cl:n" => "clear: none;",
    "cl:l" => "clear: left;",
    "cl:r" => "clear: right;",
    "cl:b" => "clear: both;",
    "w" => "width: $1;",
    "h" => "height: $1;",
    "maw" => "max-width: $1;",
    "mah" => "max-height: $1;",
    "miw" => "min-width: $1;",
    "mih" => "min-height: $1;",
    "m" => "margin: $1;",
    "mt" => "margin-top: $1;",
    "mr" => "margin-right: $1;",
    "mb" => "margin-bottom: $1;",
    "ml" => "margin-left: $1;",
    "mx" => "margin-left: $1; margin-right: $1;",
    "my" => "margin-top: $1; margin-bottom: $1;",
    "m:a" => "margin: auto;",
    "p" => "padding: $1;",
    "pt" => "padding-top: $1;",
    "pr" => "padding-right: $1;",
    "pb" => "padding-bottom: $1;",
    "pl" => "padding-left: $1;",
    "px" => "padding-left: $1; padding-right: $1;",
    "py" => "padding-top: $1; padding-bottom: $1;",
    "bd" => "border: $1;",
    "bdt" => "border-top: $1;",
    "bdr" => "border-right: $1;",
    "bdb" => "border-bottom: $1;",
    "bdl" => "border-left: $1;",
    "bdw" => "border-width: $1;",
    "bds" => "border-style: $1;",
    "bds:n" => "border-style: none;",
    "bds:h" => "border-style: hidden;",
    "bds:dt" => "border-style: dotted;",
    "bds:ds" => "border-style: dashed;",
    "bds:s" => "border-style: solid;",
    "bds:db" => "border-style: double;",
    "bds:g" => "border-style: groove;",
    "bds:r" => "border-style: ridge;",
    "bds:i" => "border-style: inset;",
    "bds:o" => "border-style: outset;",
    "bdc" => "border-color: $1;",
    "bdrs" => "border-radius: $1;",
    "bg" => "background: $1;",
    "bgc" => "background-color: $1;",
    "bgi" => "background-image: $1;",
    "bgr" => "background-repeat: $1;",
    "bgr:n" => "background-repeat: no-repeat;",
    "bgr:x" => "background-repeat: repeat-x;",
    "bgr:y" => "background-repeat: repeat-y;",
    "bga" => "background-attachment: $1;",
    "bga:f" => "background-attachment: fixed;",
    "bga:s" => "background-attachment: scroll;",
    "bgp" => "background-position: $1;",
    "bgs" => "background-size: $1;",
    "bgs:a" => "background-size: auto;",
    "bgs:ct" => "background-size: contain;",
    "bgs:cv" => "background-size: cover;",
    "c" => "color: $1;",
    "op" => "opacity: $1;",
    "f" => "font: $1;",
    "ff" => "font-family: $1;",
    "fs" => "font-size: $1;",
    "fw" => "font-weight: $1;",
    "fw:n" => "font-weight: normal;",
    "fw:b" => "font-weight: bold;",
    "fw:br" => "font-weight: bolder;",
    "fw:lr" => "font-weight: lighter;",
    "fst" => "font-style: $1;",
    "fst:n" => "font-style: normal;",
    "fst:i" => "font-style: italic;",
    "fst:o" => "font-style: oblique;",
    "fv" => "font-variant: $1;",
    "fv:n" => "font-variant: normal;",
    "fv:sc" => "font-variant: small-caps;",
    "ta" => "text-align: $1;",
    "ta:l" => "text-align: left;",
    "ta:c" => "text-align: center;",
    "ta:r" => "text-align: right;",
    "ta:j" => "text-align: justify;",
    "td" => "text-decoration: $1;",
    "td:n" => "text-decoration: none;",
    "td:u" => "text-decoration: underline;",
    "td:o" => "text-decoration: overline;",
    "td:l" => "text-decoration: line-through;",
    "ti" => "text-indent: $1;",
    "tt" => "text-transform: $1;",
    "tt:n" => "text-transform: none;",
    "tt:c" => "text-transform: capitalize;",
    "tt:u" => "text-transform: uppercase;",
    "tt:l" => "text-transform: lowercase;",
    "lh" => "line-height: $1;",
    "ls" => "letter-spacing: $1;",
    "ws" => "word-spacing: $1;",
    "ww" => "word-wrap: $1;",
    "ww:n" => "word-wrap: normal;",
    "ww:bw" => "word-wrap: break-word;",
    "wb" => "word-break: $1;",
    "wb:n" => "word-break: normal;",
    "wb:k" => "word-break: keep-all;",
    "wb:ba" => "word-break: break-all;",
    "fx" => "flex: $1;",
    "fxd" => "flex-direction: $1;",
    "fxd:r" => "flex-direction: row;",
    "fxd:rr" => "flex-direction: row-reverse;",
    "fxd:c" => "flex-direction: column;",
    "fxd:cr" => "flex-direction: column-reverse;",
    "fxw" => "flex-wrap: $1;",
    "fxw:n" => "flex-wrap: nowrap;",
    "fxw:w" => "flex-wrap: wrap;",
    "fxw:wr" => "flex-wrap: wrap-reverse;",
    "jc" => "justify-content: $1;",
    "jc:fs" => "justify-content: flex-start;",
    "jc:fe" => "justify-content: flex-end;",
    "jc:c" => "justify-content: center;",
    "jc:sb" => "justify-content: space-between;",
    "jc:sa" => "justify-content: space-around;",
    "jc:se" => "justify-content: space-evenly;",
    "ai" => "align-items: $1;",
    "ai:fs" => "align-items: flex-start;",
    "ai:fe" => "align-items: flex-end;",
    "ai:c" => "align-items: center;",
    "ai:b" => "align-items: baseline;",
    "ai:s" => "align-items: stretch;",
    "ac" => "align-content: $1;",
    "as" => "align-self: $1;",
    "fg" => "flex-grow: $1;",
    "fb" => "flex-basis: $1;",
    "gtc" => "grid-template-columns: $1;",
    "gtr" => "grid-template-rows: $1;",
    "gta" => "grid-template-areas: $1;",
    "gt" => "grid-template: $1;",
    "gg" => "grid-gap: $1;",
    "gcg" => "grid-column-gap: $1;",
    "grg" => "grid-row-gap: $1;",
    "gc" => "grid-column: $1;",
    "gcs" => "grid-column-start: $1;",
    "gce" => "grid-column-end: $1;",
    "gr" => "grid-row: $1;",
    "grs" => "grid-row-start: $1;",
    "gre" => "grid-row-end: $1;",
    "ga" => "grid-area: $1;",
    "jis" => "justify-items: $1;",
    "acs" => "align-content: $1;",
    "js" => "justify-self: $1;",
    "trf" => "transform: $1;",
    "trfo" => "transform-origin: $1;",
    "trfs" => "transform-style: $1;",
    "trs" => "transition: $1;",
    "trsp" => "transition-property: $1;",
    "trsd" => "transition-duration: $1;",
    "trstf" => "transition-timing-function: $1;",
    "trsdl" => "transition-delay: $1;",
    "anim" => "animation: $1;",
    "animn" => "animation-name: $1;",
    "animd" => "animation-duration: $1;",
    "animtf" => "animation-timing-function: $1;",
    "animdl" => "animation-delay: $1;",
    "animic" => "animation-iteration-count: $1;",
    "animdir" => "animation-direction: $1;",
    "animfm" => "animation-fill-mode: $1;",
    "animps" => "animation-play-state: $1;",
    "bxsh" => "box-shadow: $1;",
    "bxsh:n" => "box-shadow: none;",
    "bxsh:i" => "box-shadow: inset $1;",
    "tsh" => "text-shadow: $1;",
    "tsh:n" => "text-shadow: none;",
    "cur" => "cursor: $1;",
    "cur:a" => "cursor: auto;",
    "cur:d" => "cursor: default;",
    "cur:p" => "cursor: pointer;",
    "cur:t" => "cursor: text;",
    "cur:m" => "cursor: move;",
    "cur:h" => "cursor: help;",
    "cur:w" => "cursor: wait;",
    "cur:c" => "cursor: crosshair;",
    "cur:nr" => "cursor: not-allowed;",
    "lis" => "list-style: $1;",
    "lisp" => "list-style-position: $1;",
    "lisp:i" => "list-style-position: inside;",
    "lisp:o" => "list-style-position: outside;",
    "list" => "list-style-type: $1;",
    "list:n" => "list-style-type: none;",
    "list:d" => "list-style-type: disc;",
    "list:c" => "list-style-type: circle;",
    "list:s" => "list-style-type: square;",
    "list:dc" => "list-style-type: decimal;",
    "list:dclz" => "list-style-type: decimal-leading-zero;",
    "list:lr" => "list-style-type: lower-roman;",
    "list:ur" => "list-style-type: upper-roman;",
    "lisi" => "list-style-image: $1;",
    "lisi:n" => "list-style-image: none;",
    "tbl" => "table-layout: $1;",
    "tbl:a" => "table-layout: auto;",
    "tbl:f" => "table-layout: fixed;",
    "cps" => "caption-side: $1;",
    "cps:t" => "caption-side: top;",
    "cps:b" => "caption-side: bottom;",
    "ec" => "empty-cells: $1;",
    "ec:s" => "empty-cells: show;",
    "ec:h" => "empty-cells: hide;",
    "cnt" => "content: $1;",
    "cnt:n" => "content: normal;",
    "cnt:oq" => "content: open-quote;",
    "cnt:noq" => "content: no-open-quote;",
    "cnt:cq" => "content: close-quote;",
    "cnt:ncq" => "content: no-close-quote;",
    "cnt:a" => "content: attr($1);",
    "cnt:c" => "content: counter($1);",
    "cnt:cs" => "content: counters($1);",
    "q" => "quotes: $1;",
    "q:n" => "quotes: none;",
    "q:ru" => "quotes: \"\\201C\" \"\\201D\" \"\\2018\" \"\\2019\";",
    "q:en" => "quotes: \"\\201C\" \"\\201D\" \"\\2018\" \"\\2019\";",
    "coi" => "counter-increment: $1;",
    "cor" => "counter-reset: $1;",
    "rsz" => "resize: $1;",
    "rsz:n" => "resize: none;",
    "rsz:b" => "resize: both;",
    "rsz:h" => "resize: horizontal;",
    "rsz:v" => "resize: vertical;",
    "us" => "user-select: $1;",
    "us:n" => "user-select: none;",
    "us:t" => "user-select: text;",
    "us:a" => "user-select: all;",
    "us:auto" => "user-select: auto;",
};
