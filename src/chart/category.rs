//! File categories and the static extension lookup table.

use serde::{Deserialize, Serialize};

/// Broad file category used to pick a chart color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Application,
    Text,
    Video,
    Audio,
    Image,
    Archive,
    Default,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Application,
        Category::Text,
        Category::Video,
        Category::Audio,
        Category::Image,
        Category::Archive,
        Category::Default,
    ];

    /// Base chart color as `(r, g, b)`.
    pub fn base_color(&self) -> (u8, u8, u8) {
        match self {
            Category::Application => (0xE8, 0x59, 0x0C),
            Category::Text => (0x1C, 0x7E, 0xD6),
            Category::Video => (0xAE, 0x3E, 0xC9),
            Category::Audio => (0x2F, 0x9E, 0x44),
            Category::Image => (0xF0, 0x8C, 0x00),
            Category::Archive => (0xC9, 0x2A, 0x2A),
            Category::Default => (0x86, 0x8E, 0x96),
        }
    }

    /// Categorize a chart label.
    ///
    /// Labels are either file extensions (`"mp3"`, `".tar"`) or mime types
    /// (`"audio/mpeg"`). Unknown labels map to [`Category::Default`].
    pub fn from_label(label: &str) -> Category {
        let label = label.trim().trim_start_matches('.').to_ascii_lowercase();

        match label.split_once('/') {
            Some((top, subtype)) => Self::from_mime(top, subtype),
            None => category_for_extension(&label).unwrap_or(Category::Default),
        }
    }

    fn from_mime(top: &str, subtype: &str) -> Category {
        match top {
            "audio" => Category::Audio,
            "video" => Category::Video,
            "image" => Category::Image,
            "text" => Category::Text,
            "application" => {
                let subtype = subtype
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .trim_start_matches("x-")
                    .trim_start_matches("vnd.");
                if subtype.contains("compressed") || subtype.contains("archive") {
                    Category::Archive
                } else {
                    category_for_extension(subtype).unwrap_or(Category::Application)
                }
            }
            _ => Category::Default,
        }
    }
}

/// Look up the category of a lowercase file extension (without the dot).
pub fn category_for_extension(ext: &str) -> Option<Category> {
    let category = match ext {
        "bcpio" | "bin" | "cdf" | "csh" | "dll" | "doc" | "dot" | "dvi" | "eml" | "exe"
        | "hdf" | "man" | "me" | "mht" | "mhtml" | "mif" | "ms" | "nc" | "nws" | "o"
        | "obj" | "oda" | "p12" | "p7c" | "pfx" | "tr" | "ppa" | "pps" | "ppt" | "ps"
        | "pwz" | "pyc" | "pyo" | "ram" | "rdf" | "roff" | "sh" | "so" | "src" | "sv4cpio"
        | "sv4crc" | "t" | "tcl" | "tex" | "texi" | "texinfo" | "ustar" | "wiz" | "wsdl"
        | "xlb" | "xls" | "xpdl" | "xsl" | "torrent" | "rpm" | "deb" | "atr" | "class"
        | "ttf" | "img" | "msi" | "run" | "pot" => Category::Application,

        "java" | "cpp" | "rb" | "bat" | "latex" | "xml" | "etx" | "htm" | "c" | "css"
        | "csv" | "html" | "js" | "json" | "ksh" | "pl" | "py" | "h" | "tsv" | "rtx"
        | "sgm" | "sgml" | "txt" | "vcf" | "pdf" | "epub" | "srt" | "inc" | "php" | "cbz"
        | "docx" | "mobi" | "chm" | "xlsx" | "djvu" | "rtf" | "log" | "md" => Category::Text,

        "3g2" | "3gp" | "asf" | "asx" | "avi" | "flv" | "swf" | "vob" | "qt" | "webm"
        | "mov" | "m1v" | "m3u" | "m3u8" | "movie" | "mp4" | "mpa" | "mpe" | "mpeg" | "mpg"
        | "mkv" | "wmv" | "m4s" | "ogv" | "m4b" | "m4v" | "mka" => Category::Video,

        "wav" | "snd" | "mp2" | "aif" | "iff" | "m4a" | "mid" | "midi" | "mp3" | "wma"
        | "ra" | "aifc" | "aiff" | "au" | "flac" | "ogg" | "oga" | "ac3" => Category::Audio,

        "bmp" | "gif" | "jpg" | "xwd" | "tif" | "tiff" | "png" | "pnm" | "ras" | "ico"
        | "ief" | "pgm" | "jpe" | "pbm" | "jpeg" | "ppm" | "xpm" | "xbm" | "rgb" | "svg"
        | "psd" | "yuv" | "ai" | "eps" => Category::Image,

        "ar" | "cpio" | "shar" | "iso" | "lbr" | "mar" | "sbx" | "bz2" | "f" | "gz" | "lz"
        | "lzma" | "lzo" | "rz" | "sfark" | "sz" | "z" | "7z" | "s7z" | "ace" | "afa"
        | "alz" | "apk" | "arc" | "arj" | "b1" | "b6z" | "a" | "bh" | "cab" | "car" | "cfs"
        | "cpt" | "dar" | "dd" | "dgc" | "dmg" | "ear" | "gca" | "ha" | "hki" | "ice"
        | "jar" | "kgb" | "lzh" | "lha" | "lzx" | "pak" | "partimg" | "paq6" | "paq7"
        | "paq8" | "pea" | "pim" | "pit" | "qda" | "rar" | "rk" | "sda" | "sea" | "sen"
        | "sfx" | "shk" | "sit" | "sitx" | "sqx" | "tbz2" | "tlz" | "xz" | "txz" | "uc"
        | "uc0" | "uc2" | "ucn" | "ur2" | "ue2" | "uca" | "uha" | "war" | "wim" | "xar"
        | "xp3" | "yz1" | "zip" | "zipx" | "zoo" | "zpaq" | "zz" | "xpi" | "tgz" | "tbz"
        | "tar" | "bz" | "gzip" | "bzip2" => Category::Archive,

        _ => return None,
    };
    Some(category)
}
