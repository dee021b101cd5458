// 诗词 .tab テキストの解析
//
// 1 首あたりのフォーマット：
//
//   <題名>[<朝代>]<作者>\n
//   <本文（複数行可）>分类标签: <タグ>\n
//
// 先頭から区切り文字を 1 つずつ探し，その手前を 1 フィールドとして切り出す．
// 切り出した部分の改行は取り除く（空白は挿入しない）．
// 区切り文字が見つからない場合はエラーとし，部分的な結果は返さない．

pub mod assembler;
pub mod cursor;
pub mod error;
pub mod format;
pub mod poem;
pub mod renderer;
