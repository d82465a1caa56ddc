// Built-in glyph artwork for printable ASCII plus the degree sign,
// packed in the display driver cell format (see cell.rs for the layout).
// Generated data asset. Do not edit by hand.

static BUILTIN_12X16: &[(char, [u8; 24])] = &[
    (' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('!', [0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('"', [0x00, 0x00, 0x00, 0x00, 0x1E, 0x00, 0x1E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('#', [0x00, 0x00, 0x20, 0xA0, 0x7C, 0x20, 0xA0, 0x7C, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x0F, 0x01, 0x01, 0x0F, 0x01, 0x01, 0x00, 0x00, 0x00]),
    ('$', [0x00, 0x00, 0x30, 0x48, 0xFE, 0x84, 0x84, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x04, 0x1F, 0x08, 0x0C, 0x03, 0x00, 0x00, 0x00, 0x00]),
    ('%', [0x00, 0x00, 0x1C, 0x14, 0x1C, 0xC0, 0x30, 0x0C, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x0C, 0x03, 0x00, 0x0E, 0x0A, 0x0E, 0x00, 0x00, 0x00]),
    ('&', [0x00, 0x00, 0x10, 0x28, 0xC4, 0x84, 0x9C, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0E, 0x09, 0x11, 0x11, 0x0E, 0x08, 0x10, 0x00, 0x00, 0x00]),
    ('\'', [0x00, 0x00, 0x00, 0x00, 0x00, 0x1E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('(', [0x00, 0x00, 0x00, 0x00, 0xF0, 0x0C, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x0C, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (')', [0x00, 0x00, 0x00, 0x00, 0x02, 0x0C, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x0C, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('*', [0x00, 0x00, 0x20, 0x40, 0xC0, 0xF8, 0xC0, 0x40, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x00, 0x07, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00]),
    ('+', [0x00, 0x00, 0x80, 0x80, 0x80, 0xF0, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (',', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('-', [0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('.', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('/', [0x00, 0x00, 0x00, 0x00, 0x80, 0x78, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('0', [0x00, 0x00, 0xF8, 0x04, 0x82, 0x62, 0x1A, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x0E, 0x11, 0x10, 0x18, 0x07, 0x00, 0x00, 0x00, 0x00]),
    ('1', [0x00, 0x00, 0x00, 0x00, 0x08, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x1F, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('2', [0x00, 0x00, 0x08, 0x04, 0x04, 0x02, 0xC2, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x1C, 0x12, 0x11, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('3', [0x00, 0x00, 0x04, 0x02, 0x82, 0x82, 0xC2, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x08, 0x10, 0x10, 0x18, 0x07, 0x00, 0x00, 0x00, 0x00]),
    ('4', [0x00, 0x00, 0x00, 0xC0, 0x30, 0x0C, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x01, 0x01, 0x01, 0x1F, 0x01, 0x00, 0x00, 0x00, 0x00]),
    ('5', [0x00, 0x00, 0x7E, 0x42, 0x42, 0x42, 0x82, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x10, 0x10, 0x18, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('6', [0x00, 0x00, 0xF8, 0x84, 0x42, 0xC6, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x10, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('7', [0x00, 0x00, 0x02, 0x02, 0x02, 0x82, 0x7A, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('8', [0x00, 0x00, 0x3C, 0x42, 0x82, 0x82, 0xC2, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0F, 0x11, 0x10, 0x10, 0x10, 0x0F, 0x00, 0x00, 0x00, 0x00]),
    ('9', [0x00, 0x00, 0x38, 0x44, 0x82, 0x82, 0xFC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x08, 0x10, 0x18, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (':', [0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    (';', [0x00, 0x00, 0x00, 0x00, 0x00, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('<', [0x00, 0x00, 0x80, 0x40, 0x20, 0x20, 0x10, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x02, 0x02, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00]),
    ('=', [0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00]),
    ('>', [0x00, 0x00, 0x08, 0x10, 0x20, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x04, 0x02, 0x02, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('?', [0x00, 0x00, 0x00, 0x08, 0x06, 0x82, 0x42, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1B, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('@', [0x00, 0x00, 0xF0, 0x08, 0xE4, 0x14, 0xE4, 0x08, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x04, 0x09, 0x0A, 0x0B, 0x09, 0x01, 0x00, 0x00, 0x00]),
    ('A', [0x00, 0x00, 0x00, 0x80, 0xF8, 0x86, 0xF8, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x07, 0x00, 0x00, 0x00, 0x07, 0x18, 0x00, 0x00, 0x00]),
    ('B', [0x00, 0x00, 0xFE, 0x82, 0x82, 0x82, 0xC2, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x10, 0x10, 0x10, 0x10, 0x09, 0x07, 0x00, 0x00, 0x00]),
    ('C', [0x00, 0x00, 0xF8, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x10, 0x10, 0x08, 0x04, 0x00, 0x00, 0x00]),
    ('D', [0x00, 0x00, 0xFE, 0x02, 0x02, 0x02, 0x02, 0x04, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x10, 0x10, 0x10, 0x10, 0x08, 0x07, 0x00, 0x00, 0x00]),
    ('E', [0x00, 0x00, 0xFE, 0x82, 0x82, 0x82, 0x82, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('F', [0x00, 0x00, 0xFE, 0x82, 0x82, 0x82, 0x82, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('G', [0x00, 0x00, 0xF8, 0x04, 0x02, 0x02, 0x82, 0x84, 0x88, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x10, 0x10, 0x08, 0x07, 0x00, 0x00, 0x00]),
    ('H', [0x00, 0x00, 0xFE, 0x80, 0x80, 0x80, 0x80, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00]),
    ('I', [0x00, 0x00, 0x00, 0x02, 0x02, 0xFE, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x1F, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('J', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x10, 0x10, 0x18, 0x07, 0x00, 0x00, 0x00, 0x00]),
    ('K', [0x00, 0x00, 0xFE, 0x40, 0x30, 0x08, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('L', [0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x10, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('M', [0x00, 0x00, 0xFE, 0x0C, 0x30, 0xC0, 0x60, 0x18, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00]),
    ('N', [0x00, 0x00, 0xFE, 0x18, 0x60, 0x80, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x01, 0x06, 0x1F, 0x00, 0x00, 0x00, 0x00]),
    ('O', [0x00, 0x00, 0xF8, 0x04, 0x02, 0x02, 0x02, 0x04, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x10, 0x10, 0x08, 0x07, 0x00, 0x00, 0x00]),
    ('P', [0x00, 0x00, 0xFE, 0x82, 0x82, 0x82, 0xC2, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('Q', [0x00, 0x00, 0xF8, 0x04, 0x02, 0x02, 0x02, 0x04, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x10, 0x12, 0x0C, 0x37, 0x00, 0x00, 0x00]),
    ('R', [0x00, 0x00, 0xFE, 0x82, 0x82, 0x82, 0xC2, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x03, 0x0C, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('S', [0x00, 0x00, 0x38, 0x44, 0x82, 0x82, 0x86, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04, 0x08, 0x10, 0x10, 0x18, 0x07, 0x00, 0x00, 0x00, 0x00]),
    ('T', [0x00, 0x00, 0x02, 0x02, 0xFE, 0x02, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('U', [0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x10, 0x10, 0x0F, 0x00, 0x00, 0x00, 0x00]),
    ('V', [0x00, 0x00, 0x0E, 0xF0, 0x00, 0x80, 0x78, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x1C, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('W', [0x00, 0x00, 0x0E, 0xF0, 0x00, 0xE0, 0x00, 0xF0, 0x0E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x1E, 0x01, 0x1E, 0x03, 0x00, 0x00, 0x00, 0x00]),
    ('X', [0x00, 0x00, 0x06, 0x18, 0xE0, 0xE0, 0x18, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x06, 0x01, 0x01, 0x06, 0x18, 0x00, 0x00, 0x00, 0x00]),
    ('Y', [0x00, 0x00, 0x06, 0x38, 0xC0, 0x30, 0x0C, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('Z', [0x00, 0x00, 0x02, 0x02, 0x82, 0x62, 0x1A, 0x06, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x16, 0x11, 0x10, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('[', [0x00, 0x00, 0x00, 0x00, 0xFE, 0x02, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('\\', [0x00, 0x00, 0x02, 0x0C, 0x30, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, 0x0C, 0x10, 0x00, 0x00, 0x00]),
    (']', [0x00, 0x00, 0x00, 0x00, 0x02, 0x02, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x40, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('^', [0x00, 0x00, 0x20, 0x10, 0x08, 0x04, 0x08, 0x10, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('_', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, 0x00]),
    ('`', [0x00, 0x00, 0x00, 0x00, 0x02, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('a', [0x00, 0x00, 0x00, 0x80, 0x40, 0x20, 0x20, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x10, 0x1F, 0x00, 0x00, 0x00, 0x00]),
    ('b', [0x00, 0x00, 0x00, 0xFE, 0x20, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x10, 0x10, 0x08, 0x07, 0x00, 0x00, 0x00, 0x00]),
    ('c', [0x00, 0x00, 0x00, 0xC0, 0x20, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x18, 0x10, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00]),
    ('d', [0x00, 0x00, 0x00, 0x80, 0x40, 0x20, 0x20, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x10, 0x1F, 0x00, 0x00, 0x00, 0x00]),
    ('e', [0x00, 0x00, 0x00, 0xC0, 0x20, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x0A, 0x12, 0x12, 0x0B, 0x00, 0x00, 0x00, 0x00]),
    ('f', [0x00, 0x00, 0x00, 0x20, 0x20, 0xFC, 0x22, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('g', [0x00, 0x00, 0x00, 0x80, 0x40, 0x20, 0x20, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x87, 0x88, 0x90, 0x90, 0x7F, 0x00, 0x00, 0x00, 0x00]),
    ('h', [0x00, 0x00, 0x00, 0xFE, 0x40, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00]),
    ('i', [0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('j', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('k', [0x00, 0x00, 0x00, 0xFE, 0x00, 0x80, 0x40, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x05, 0x08, 0x08, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('l', [0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('m', [0x00, 0x00, 0xE0, 0x40, 0xE0, 0x40, 0x20, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x1F, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00]),
    ('n', [0x00, 0x00, 0x00, 0xE0, 0x40, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00]),
    ('o', [0x00, 0x00, 0x80, 0x40, 0x20, 0x20, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x18, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('p', [0x00, 0x00, 0x00, 0xE0, 0x20, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x10, 0x10, 0x08, 0x07, 0x00, 0x00, 0x00, 0x00]),
    ('q', [0x00, 0x00, 0x00, 0x80, 0x40, 0x20, 0x20, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x10, 0xFF, 0x00, 0x00, 0x00, 0x00]),
    ('r', [0x00, 0x00, 0x00, 0xE0, 0x40, 0x20, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('s', [0x00, 0x00, 0x00, 0xC0, 0x20, 0x20, 0x40, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x09, 0x12, 0x12, 0x14, 0x0C, 0x00, 0x00, 0x00, 0x00]),
    ('t', [0x00, 0x00, 0x00, 0x20, 0x20, 0xFC, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x08, 0x08, 0x00, 0x00, 0x00, 0x00]),
    ('u', [0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x10, 0x08, 0x1F, 0x00, 0x00, 0x00, 0x00]),
    ('v', [0x00, 0x00, 0x00, 0x60, 0x80, 0x00, 0x80, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x07, 0x18, 0x07, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('w', [0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x1E, 0x07, 0x1E, 0x01, 0x00, 0x00, 0x00, 0x00]),
    ('x', [0x00, 0x00, 0x00, 0x20, 0xC0, 0x00, 0xC0, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x0C, 0x03, 0x0C, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('y', [0x00, 0x00, 0x00, 0x60, 0x80, 0x00, 0x80, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xE1, 0x1E, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('z', [0x00, 0x00, 0x00, 0x20, 0x20, 0x20, 0xE0, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x1C, 0x13, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00]),
    ('{', [0x00, 0x00, 0x00, 0x00, 0x80, 0x7C, 0x04, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00]),
    ('|', [0x00, 0x00, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('}', [0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7F, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('~', [0x00, 0x00, 0x80, 0x40, 0x20, 0x40, 0x80, 0x60, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('\u{b0}', [0x00, 0x00, 0x1C, 0x12, 0x22, 0x22, 0x1C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
];

static BUILTIN_6X8: &[(char, [u8; 6])] = &[
    (' ', [0x00, 0x00, 0x00, 0x00, 0x00, 0x00]),
    ('!', [0x00, 0x00, 0x7F, 0x00, 0x00, 0x00]),
    ('"', [0x00, 0x00, 0x07, 0x07, 0x00, 0x00]),
    ('#', [0x00, 0x3C, 0x16, 0x3E, 0x00, 0x00]),
    ('$', [0x00, 0x24, 0x7F, 0x12, 0x00, 0x00]),
    ('%', [0x00, 0x66, 0x1E, 0x33, 0x00, 0x00]),
    ('&', [0x00, 0x36, 0x4B, 0x7C, 0x00, 0x00]),
    ('\'', [0x00, 0x00, 0x07, 0x00, 0x00, 0x00]),
    ('(', [0x00, 0x00, 0x1E, 0x61, 0x00, 0x00]),
    (')', [0x00, 0x00, 0x61, 0x1E, 0x00, 0x00]),
    ('*', [0x00, 0x14, 0x3E, 0x14, 0x00, 0x00]),
    ('+', [0x00, 0x08, 0x3C, 0x08, 0x00, 0x00]),
    (',', [0x00, 0x00, 0xE0, 0x00, 0x00, 0x00]),
    ('-', [0x00, 0x08, 0x08, 0x00, 0x00, 0x00]),
    ('.', [0x00, 0x00, 0x60, 0x00, 0x00, 0x00]),
    ('/', [0x00, 0x78, 0x07, 0x00, 0x00, 0x00]),
    ('0', [0x00, 0x3E, 0x59, 0x3E, 0x00, 0x00]),
    ('1', [0x00, 0x42, 0x7F, 0x40, 0x00, 0x00]),
    ('2', [0x00, 0x63, 0x59, 0x46, 0x00, 0x00]),
    ('3', [0x00, 0x22, 0x49, 0x36, 0x00, 0x00]),
    ('4', [0x00, 0x1C, 0x7F, 0x10, 0x00, 0x00]),
    ('5', [0x00, 0x6F, 0x49, 0x31, 0x00, 0x00]),
    ('6', [0x00, 0x3E, 0x49, 0x32, 0x00, 0x00]),
    ('7', [0x00, 0x01, 0x79, 0x07, 0x00, 0x00]),
    ('8', [0x00, 0x36, 0x49, 0x36, 0x00, 0x00]),
    ('9', [0x00, 0x26, 0x49, 0x3E, 0x00, 0x00]),
    (':', [0x00, 0x00, 0x6C, 0x00, 0x00, 0x00]),
    (';', [0x00, 0x00, 0xEC, 0x00, 0x00, 0x00]),
    ('<', [0x00, 0x08, 0x34, 0x42, 0x00, 0x00]),
    ('=', [0x00, 0x14, 0x14, 0x14, 0x00, 0x00]),
    ('>', [0x00, 0x42, 0x34, 0x08, 0x00, 0x00]),
    ('?', [0x00, 0x03, 0x79, 0x06, 0x00, 0x00]),
    ('@', [0x00, 0x1E, 0x7D, 0x5F, 0x00, 0x00]),
    ('A', [0x00, 0x70, 0x0F, 0x78, 0x00, 0x00]),
    ('B', [0x00, 0x7F, 0x49, 0x7F, 0x00, 0x00]),
    ('C', [0x00, 0x3E, 0x41, 0x63, 0x00, 0x00]),
    ('D', [0x00, 0x7F, 0x41, 0x3E, 0x00, 0x00]),
    ('E', [0x00, 0x7F, 0x49, 0x49, 0x00, 0x00]),
    ('F', [0x00, 0x7F, 0x09, 0x09, 0x00, 0x00]),
    ('G', [0x00, 0x3E, 0x49, 0x7B, 0x00, 0x00]),
    ('H', [0x00, 0x7F, 0x08, 0x7F, 0x00, 0x00]),
    ('I', [0x00, 0x41, 0x7F, 0x41, 0x00, 0x00]),
    ('J', [0x00, 0x60, 0x40, 0x3F, 0x00, 0x00]),
    ('K', [0x00, 0x7F, 0x36, 0x41, 0x00, 0x00]),
    ('L', [0x00, 0x7F, 0x40, 0x40, 0x00, 0x00]),
    ('M', [0x00, 0x7F, 0x0C, 0x7F, 0x00, 0x00]),
    ('N', [0x00, 0x7F, 0x1C, 0x7F, 0x00, 0x00]),
    ('O', [0x00, 0x3E, 0x41, 0x7F, 0x00, 0x00]),
    ('P', [0x00, 0x7F, 0x09, 0x0F, 0x00, 0x00]),
    ('Q', [0x00, 0x3E, 0x51, 0x7F, 0x00, 0x00]),
    ('R', [0x00, 0x7F, 0x19, 0x6F, 0x00, 0x00]),
    ('S', [0x00, 0x26, 0x49, 0x32, 0x00, 0x00]),
    ('T', [0x00, 0x01, 0x7F, 0x01, 0x00, 0x00]),
    ('U', [0x00, 0x3F, 0x40, 0x3F, 0x00, 0x00]),
    ('V', [0x00, 0x07, 0x78, 0x0F, 0x00, 0x00]),
    ('W', [0x00, 0x07, 0x7C, 0x7F, 0x00, 0x00]),
    ('X', [0x00, 0x63, 0x1C, 0x63, 0x00, 0x00]),
    ('Y', [0x00, 0x03, 0x7C, 0x03, 0x00, 0x00]),
    ('Z', [0x00, 0x61, 0x5D, 0x43, 0x00, 0x00]),
    ('[', [0x00, 0xFF, 0x81, 0x00, 0x00, 0x00]),
    ('\\', [0x00, 0x03, 0x1C, 0x60, 0x00, 0x00]),
    (']', [0x00, 0x81, 0xFF, 0x00, 0x00, 0x00]),
    ('^', [0x00, 0x04, 0x03, 0x06, 0x00, 0x00]),
    ('_', [0x00, 0x80, 0x80, 0x80, 0x00, 0x00]),
    ('`', [0x00, 0x00, 0x03, 0x00, 0x00, 0x00]),
    ('a', [0x00, 0x38, 0x44, 0x7C, 0x00, 0x00]),
    ('b', [0x00, 0x7F, 0x44, 0x38, 0x00, 0x00]),
    ('c', [0x00, 0x7C, 0x44, 0x28, 0x00, 0x00]),
    ('d', [0x00, 0x38, 0x44, 0x7F, 0x00, 0x00]),
    ('e', [0x00, 0x3C, 0x54, 0x38, 0x00, 0x00]),
    ('f', [0x00, 0x00, 0x04, 0x7F, 0x00, 0x00]),
    ('g', [0x00, 0xB8, 0xC4, 0xFC, 0x00, 0x00]),
    ('h', [0x00, 0x7F, 0x04, 0x78, 0x00, 0x00]),
    ('i', [0x00, 0x00, 0x7E, 0x00, 0x00, 0x00]),
    ('j', [0x00, 0x00, 0x80, 0xFE, 0x00, 0x00]),
    ('k', [0x00, 0x7F, 0x24, 0x40, 0x00, 0x00]),
    ('l', [0x00, 0x00, 0x7F, 0x00, 0x00, 0x00]),
    ('m', [0x00, 0x7C, 0x7C, 0x7C, 0x00, 0x00]),
    ('n', [0x00, 0x7C, 0x04, 0x78, 0x00, 0x00]),
    ('o', [0x00, 0x38, 0x44, 0x38, 0x00, 0x00]),
    ('p', [0x00, 0xFC, 0x44, 0x38, 0x00, 0x00]),
    ('q', [0x00, 0x38, 0x44, 0xFC, 0x00, 0x00]),
    ('r', [0x00, 0x00, 0x7C, 0x0C, 0x00, 0x00]),
    ('s', [0x00, 0x7C, 0x7C, 0x00, 0x00, 0x00]),
    ('t', [0x00, 0x04, 0x7E, 0x00, 0x00, 0x00]),
    ('u', [0x00, 0x3C, 0x40, 0x7C, 0x00, 0x00]),
    ('v', [0x00, 0x0C, 0x70, 0x1C, 0x00, 0x00]),
    ('w', [0x00, 0x7C, 0x70, 0x1C, 0x00, 0x00]),
    ('x', [0x00, 0x7C, 0x7C, 0x00, 0x00, 0x00]),
    ('y', [0x00, 0xCC, 0x30, 0x0C, 0x00, 0x00]),
    ('z', [0x00, 0x74, 0x4C, 0x00, 0x00, 0x00]),
    ('{', [0x00, 0x08, 0xFF, 0x00, 0x00, 0x00]),
    ('|', [0x00, 0x00, 0xFF, 0x00, 0x00, 0x00]),
    ('}', [0x00, 0x00, 0xFF, 0x08, 0x00, 0x00]),
    ('~', [0x00, 0x08, 0x0C, 0x04, 0x00, 0x00]),
    ('\u{b0}', [0x00, 0x06, 0x05, 0x06, 0x00, 0x00]),
];
