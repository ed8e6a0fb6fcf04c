//! Script snippet tables.
//!
//! JavaScript snippet templates keyed by abbreviation: console helpers,
//! declarations, control flow, collection and string methods, promises,
//! DOM access, timers, storage, and module syntax. Lookup is exact; the
//! keys are lowercase by convention.

use phf::phf_map;

/// Script snippet templates.
pub static SNIPPETS: phf::Map<&'static str, &'static str> = phf_map! {
    "cl" => "console.log($1);",
    "ce" => "console.error($1);",
    "cw" => "console.warn($1);",
    "ci" => "console.info($1);",
    "cd" => "console.debug($1);",
    "ct" => "console.table($1);",
    "cg" => "console.group($1);",
    "cge" => "console.groupEnd();",
    "cc" => "console.clear();",
    "ca" => "console.assert($1, $2);",
    "cti" => "console.time($1);",
    "cte" => "console.timeEnd($1);",
    "ctr" => "console.trace();",
    "cco" => "console.count($1);",
    "ccr" => "console.countReset($1);",
    "v" => "var $1 = $2;",
    "l" => "let $1 = $2;",
    "c" => "const $1 = $2;",
    "f" => "function $1($2) {\n\t$3\n}",
    "fn" => "function($1) {\n\t$2\n}",
    "af" => "($1) => {\n\t$2\n}",
    "afn" => "($1) => $2",
    "iife" => "(function($1) {\n\t$2\n})($3);",
    "fa" => "function $1($2) {\n\t$3\n}",
    "fe" => "function($1) {\n\t$2\n}",
    "if" => "if ($1) {\n\t$2\n}",
    "ife" => "if ($1) {\n\t$2\n} else {\n\t$3\n}",
    "ei" => "else if ($1) {\n\t$2\n}",
    "el" => "else {\n\t$1\n}",
    "sw" => "switch ($1) {\n\tcase $2:\n\t\t$3\n\t\tbreak;\n\tdefault:\n\t\t$4\n}",
    "cs" => "case $1:\n\t$2\n\tbreak;",
    "df" => "default:\n\t$1",
    "for" => "for (let $1 = 0; $1 < $2; $1++) {\n\t$3\n}",
    "fori" => "for (let $1 in $2) {\n\t$3\n}",
    "foro" => "for (let $1 of $2) {\n\t$3\n}",
    "wh" => "while ($1) {\n\t$2\n}",
    "dw" => "do {\n\t$1\n} while ($2);",
    "try" => "try {\n\t$1\n} catch ($2) {\n\t$3\n}",
    "tryf" => "try {\n\t$1\n} catch ($2) {\n\t$3\n} finally {\n\t$4\n}",
    "cat" => "catch ($1) {\n\t$2\n}",
    "fin" => "finally {\n\t$1\n}",
    "th" => "throw new Error($1);",
    "tn" => "throw new $1($2);",
    "o" => "{\n\t$1\n}",
    "oa" => "Object.assign($1, $2)",
    "ok" => "Object.keys($1)",
    "ov" => "Object.values($1)",
    "oe" => "Object.entries($1)",
    "of" => "Object.freeze($1)",
    "os" => "Object.seal($1)",
    "oc" => "Object.create($1)",
    "od" => "Object.defineProperty($1, $2, $3)",
    "ogpd" => "Object.getOwnPropertyDescriptor($1, $2)",
    "ogpn" => "Object.getOwnPropertyNames($1)",
    "a" => "[$1]",
    "ap" => "$1.push($2)",
    "apo" => "$1.pop()",
    "as" => "$1.shift()",
    "au" => "$1.unshift($2)",
    "aj" => "$1.join($2)",
    "ar" => "$1.reverse()",
    "aso" => "$1.sort($2)",
    "asl" => "$1.slice($2, $3)",
    "asp" => "$1.splice($2, $3, $4)",
    "ac" => "$1.concat($2)",
    "ai" => "$1.indexOf($2)",
    "ali" => "$1.lastIndexOf($2)",
    "afi" => "$1.findIndex($2)",
    "ain" => "$1.includes($2)",
    "afe" => "$1.forEach($2)",
    "am" => "$1.map($2)",
    "afl" => "$1.filter($2)",
    "arr" => "$1.reduceRight($2, $3)",
    "ae" => "$1.every($2)",
    "afm" => "$1.flatMap($2)",
    "s" => "\"$1\"",
    "st" => "`$1`",
    "sc" => "$1.charAt($2)",
    "scc" => "$1.charCodeAt($2)",
    "si" => "$1.indexOf($2)",
    "sli" => "$1.lastIndexOf($2)",
    "ssl" => "$1.slice($2, $3)",
    "ssu" => "$1.substring($2, $3)",
    "ssb" => "$1.substr($2, $3)",
    "ssp" => "$1.split($2)",
    "sr" => "$1.replace($2, $3)",
    "sra" => "$1.replaceAll($2, $3)",
    "sm" => "$1.match($2)",
    "sma" => "$1.matchAll($2)",
    "sse" => "$1.search($2)",
    "ste" => "$1.test($2)",
    "stu" => "$1.toUpperCase()",
    "stl" => "$1.toLowerCase()",
    "str" => "$1.trim()",
    "sts" => "$1.trimStart()",
    "spa" => "$1.padStart($2, $3)",
    "spe" => "$1.padEnd($2, $3)",
    "sst" => "$1.startsWith($2)",
    "sen" => "$1.endsWith($2)",
    "sin" => "$1.includes($2)",
    "sre" => "$1.repeat($2)",
    "p" => "new Promise(($1, $2) => {\n\t$3\n})",
    "pr" => "Promise.resolve($1)",
    "pj" => "Promise.reject($1)",
    "pa" => "Promise.all([$1])",
    "pas" => "Promise.allSettled([$1])",
    "pany" => "Promise.any([$1])",
    "fi" => "$1.finally($2)",
    "aw" => "await $1",
    "asf" => "async function $1($2) {\n\t$3\n}",
    "asaf" => "async ($1) => {\n\t$2\n}",
    "dge" => "document.getElementById($1)",
    "dgc" => "document.getElementsByClassName($1)",
    "dgt" => "document.getElementsByTagName($1)",
    "dqs" => "document.querySelector($1)",
    "dqsa" => "document.querySelectorAll($1)",
    "dce" => "document.createElement($1)",
    "dct" => "document.createTextNode($1)",
    "dac" => "$1.appendChild($2)",
    "drc" => "$1.removeChild($2)",
    "dic" => "$1.insertBefore($2, $3)",
    "drp" => "$1.replaceChild($2, $3)",
    "dcl" => "$1.cloneNode($2)",
    "dsa" => "$1.setAttribute($2, $3)",
    "dga" => "$1.getAttribute($2)",
    "dra" => "$1.removeAttribute($2)",
    "dha" => "$1.hasAttribute($2)",
    "dih" => "$1.innerHTML",
    "doh" => "$1.outerHTML",
    "dtc" => "$1.textContent",
    "div" => "$1.innerText",
    "dcn" => "$1.className",
    "dca" => "$1.classList.add($2)",
    "dcr" => "$1.classList.remove($2)",
    "dcc" => "$1.classList.contains($2)",
    "dst" => "$1.style",
    "dv" => "$1.value",
    "dc" => "$1.checked",
    "dd" => "$1.disabled",
    "ds" => "$1.selected",
    "db" => "$1.blur()",
    "dsc" => "$1.scrollIntoView()",
    "ael" => "$1.addEventListener($2, $3)",
    "rel" => "$1.removeEventListener($2, $3)",
    "de" => "$1.dispatchEvent($2)",
    "pe" => "$1.preventDefault()",
    "sp" => "$1.stopPropagation()",
    "sip" => "$1.stopImmediatePropagation()",
    "jp" => "JSON.parse($1)",
    "js" => "JSON.stringify($1)",
    "jss" => "JSON.stringify($1, null, 2)",
    "mr" => "Math.random()",
    "mf" => "Math.floor($1)",
    "mc" => "Math.ceil($1)",
    "mro" => "Math.round($1)",
    "mab" => "Math.abs($1)",
    "mmi" => "Math.min($1)",
    "mma" => "Math.max($1)",
    "mp" => "Math.pow($1, $2)",
    "msq" => "Math.sqrt($1)",
    "msi" => "Math.sin($1)",
    "mco" => "Math.cos($1)",
    "mta" => "Math.tan($1)",
    "mpi" => "Math.PI",
    "me" => "Math.E",
    "dn" => "new Date()",
    "dno" => "Date.now()",
    "dgy" => "$1.getFullYear()",
    "dgm" => "$1.getMonth()",
    "dgd" => "$1.getDate()",
    "dgh" => "$1.getHours()",
    "dgmi" => "$1.getMinutes()",
    "dgs" => "$1.getSeconds()",
    "dgms" => "$1.getMilliseconds()",
    "dsy" => "$1.setFullYear($2)",
    "dsm" => "$1.setMonth($2)",
    "dsd" => "$1.setDate($2)",
    "dsh" => "$1.setHours($2)",
    "dsmi" => "$1.setMinutes($2)",
    "dss" => "$1.setSeconds($2)",
    "dsms" => "$1.setMilliseconds($2)",
    "dts" => "$1.toString()",
    "dtis" => "$1.toISOString()",
    "dtls" => "$1.toLocalString()",
    "dtds" => "$1.toDateString()",
    "dtts" => "$1.toTimeString()",
    "rn" => "new RegExp($1, $2)",
    "rt" => "$1.test($2)",
    "re" => "$1.exec($2)",
    "ni" => "Number.isInteger($1)",
    "nn" => "Number.isNaN($1)",
    "nf" => "Number.isFinite($1)",
    "npi" => "Number.parseInt($1, $2)",
    "npf" => "Number.parseFloat($1)",
    "nms" => "Number.MAX_SAFE_INTEGER",
    "nmsi" => "Number.MIN_SAFE_INTEGER",
    "nmv" => "Number.MAX_VALUE",
    "nmiv" => "Number.MIN_VALUE",
    "nni" => "Number.NEGATIVE_INFINITY",
    "nna" => "Number.NaN",
    "nte" => "$1.toExponential($2)",
    "ntf" => "$1.toFixed($2)",
    "ntp" => "$1.toPrecision($2)",
    "nts" => "$1.toString($2)",
    "ntv" => "$1.valueOf()",
    "sn" => "new Set($1)",
    "sa" => "$1.add($2)",
    "sd" => "$1.delete($2)",
    "sh" => "$1.has($2)",
    "ss" => "$1.size",
    "sv" => "$1.values()",
    "sk" => "$1.keys()",
    "se" => "$1.entries()",
    "sfe" => "$1.forEach($2)",
    "mn" => "new Map($1)",
    "ms" => "$1.set($2, $3)",
    "mg" => "$1.get($2)",
    "mh" => "$1.has($2)",
    "md" => "$1.delete($2)",
    "mk" => "$1.keys()",
    "mv" => "$1.values()",
    "mfe" => "$1.forEach($2)",
    "wsn" => "new WeakSet($1)",
    "wsa" => "$1.add($2)",
    "wsd" => "$1.delete($2)",
    "wsh" => "$1.has($2)",
    "wmn" => "new WeakMap($1)",
    "wms" => "$1.set($2, $3)",
    "wmg" => "$1.get($2)",
    "wmh" => "$1.has($2)",
    "wmd" => "$1.delete($2)",
    "sy" => "Symbol($1)",
    "syf" => "Symbol.for($1)",
    "syk" => "Symbol.keyFor($1)",
    "syi" => "Symbol.iterator",
    "syas" => "Symbol.asyncIterator",
    "syhs" => "Symbol.hasInstance",
    "syic" => "Symbol.isConcatSpreadable",
    "sysp" => "Symbol.species",
    "syts" => "Symbol.toStringTag",
    "sytp" => "Symbol.toPrimitive",
    "en" => "new Error($1)",
    "etn" => "new TypeError($1)",
    "ern" => "new ReferenceError($1)",
    "esn" => "new SyntaxError($1)",
    "eun" => "new URIError($1)",
    "een" => "new EvalError($1)",
    "raf" => "requestAnimationFrame($1)",
    "caf" => "cancelAnimationFrame($1)",
    "lss" => "localStorage.setItem($1, $2)",
    "lsg" => "localStorage.getItem($1)",
    "lsr" => "localStorage.removeItem($1)",
    "lsc" => "localStorage.clear()",
    "lsk" => "localStorage.key($1)",
    "lsl" => "localStorage.length",
    "sss" => "sessionStorage.setItem($1, $2)",
    "ssg" => "sessionStorage.getItem($1)",
    "ssr" => "sessionStorage.removeItem($1)",
    "ssc" => "sessionStorage.clear()",
    "ssk" => "sessionStorage.key($1)",
    "fej" => "fetch($1).then(response => response.json())",
    "fet" => "fetch($1).then(response => response.text())",
    "feb" => "fetch($1).then(response => response.blob())",
    "fea" => "fetch($1).then(response => response.arrayBuffer())",
    "fef" => "fetch($1).then(response => response.formData())",
    "imp" => "import $1 from \"$2\"",
    "impa" => "import * as $1 from \"$2\"",
    "impd" => "import { $1 } from \"$2\"",
    "impdd" => "import $1, { $2 } from \"$3\"",
    "exp" => "export $1",
    "expd" => "export default $1",
    "expf" => "export { $1 } from \"$2\"",
    "expa" => "export * from \"$1\"",
    "expas" => "export * as $1 from \"$2\"",
    "clx" => "class $1 extends $2 {\n\tconstructor($3) {\n\t\tsuper($4);\n\t\t$5\n\t}\n}",
    "con" => "constructor($1) {\n\t$2\n}",
    "met" => "$1($2) {\n\t$3\n}",
    "get" => "get $1() {\n\treturn $2;\n}",
    "set" => "set $1($2) {\n\t$3\n}",
    "sta" => "static $1($2) {\n\t$3\n}",
    "sup" => "super($1)",
    "da" => "const [$1] = $2",
    "dao" => "const { $1 } = $2",
    "daa" => "const [$1, ...$2] = $3",
    "daao" => "const { $1, ...$2 } = $3",
    "spo" => "{ $1, ...$2 }",
    "tl" => "`$1`",
    "tle" => "`$1${$2}$3`",
    "req" => "const $1 = require(\"$2\")",
    "mee" => "module.exports.$1 = $2",
    "ex" => "exports.$1 = $2",
};
